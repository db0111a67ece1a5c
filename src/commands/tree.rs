//! # Tree Command Implementation
//!
//! This module implements the `tree` subcommand, which resolves the component
//! tree and displays it in a hierarchical format.
//!
//! ## Functionality
//!
//! - **Component Tree Visualization**: One line per resolved component,
//!   labelled with its name and acquisition source.
//! - **Inline Subcomponents**: Shown as leaves under their parent, since they
//!   are never resolved on their own.
//! - **Depth Control**: Supports `--depth` flag to limit tree depth.
//!
//! This command is read-only. It does not install missing subcomponents, so a
//! git subcomponent that has not been installed yet makes it fail.

use anyhow::{Context, Result};
use clap::Args;
use ptree::{print_tree, TreeItem};

use component_tree::component::Component;
use component_tree::defaults::ROOT_LOGICAL_PATH;
use component_tree::output::OutputConfig;
use component_tree::traversal::iterate_component_tree;

use super::TraversalArgs;

/// Display the resolved component tree
#[derive(Args, Debug)]
pub struct TreeArgs {
    #[command(flatten)]
    pub traversal: TraversalArgs,

    /// Maximum depth to display in the tree.
    ///
    /// If not specified, displays the full tree.
    /// Use 0 to show only the root, 1 to show its direct subcomponents, etc.
    #[arg(long, value_name = "NUM")]
    pub depth: Option<usize>,
}

/// Execute the `tree` command.
pub fn execute(args: TreeArgs, output: &OutputConfig) -> Result<()> {
    let root = &args.traversal.path;
    println!(
        "{} Component tree for: {}",
        output.emoji("🌳", "[TREE]"),
        root.display()
    );

    let components = iterate_component_tree(root, &args.traversal.environment, |_, _| Ok(()))
        .with_context(|| format!("Failed to resolve component tree at {}", root.display()))?;

    let tree_root = build_tree_node(
        &components,
        0,
        None,
        args.depth.unwrap_or(usize::MAX),
        0,
        output,
    );
    print_tree(&tree_root).context("Failed to display tree")?;

    Ok(())
}

/// Logical path of the component that declared `logical_path`.
fn parent_logical_path(logical_path: &str) -> Option<&str> {
    if logical_path == ROOT_LOGICAL_PATH {
        return None;
    }
    Some(
        logical_path
            .rsplit_once('/')
            .map(|(parent, _)| parent)
            .unwrap_or(ROOT_LOGICAL_PATH),
    )
}

/// Display label for a resolved component, showing how its parent declared
/// it to be acquired.
fn label_for(
    component: &Component,
    declaration: Option<&Component>,
    output: &OutputConfig,
) -> String {
    match declaration {
        Some(declared) => output.component_label(&Component {
            name: component.name.clone(),
            source: declared.source.clone(),
            method: declared.method.clone(),
            logical_path: component.logical_path.clone(),
            ..Default::default()
        }),
        None => output.component_label(component),
    }
}

/// Build the display node for `components[index]` and its descendants.
fn build_tree_node(
    components: &[Component],
    index: usize,
    declaration: Option<&Component>,
    max_depth: usize,
    current_depth: usize,
    output: &OutputConfig,
) -> TreeNode {
    let component = &components[index];
    let label = label_for(component, declaration, output);

    if current_depth >= max_depth {
        return TreeNode {
            label,
            children: vec![],
        };
    }

    let mut children: Vec<TreeNode> = component
        .subcomponents
        .iter()
        .filter(|s| s.is_inline())
        .map(|s| TreeNode {
            label: format!("{} (inline)", s.name),
            children: vec![],
        })
        .collect();

    children.extend(
        components
            .iter()
            .enumerate()
            .filter(|(_, c)| {
                parent_logical_path(&c.logical_path) == Some(component.logical_path.as_str())
            })
            .map(|(i, child)| {
                let declared_name = child.logical_path.rsplit('/').next().unwrap_or_default();
                let declaration = component
                    .subcomponents
                    .iter()
                    .find(|s| !s.is_inline() && s.name == declared_name);
                build_tree_node(
                    components,
                    i,
                    declaration,
                    max_depth,
                    current_depth + 1,
                    output,
                )
            }),
    );

    TreeNode { label, children }
}

/// Tree node structure for ptree visualization
#[derive(Clone)]
struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeItem for TreeNode {
    type Child = TreeNode;

    fn write_self<W: std::io::Write>(
        &self,
        f: &mut W,
        _style: &ptree::Style,
    ) -> std::io::Result<()> {
        write!(f, "{}", self.label)
    }

    fn children(&self) -> std::borrow::Cow<'_, [Self::Child]> {
        std::borrow::Cow::Borrowed(&self.children)
    }
}
