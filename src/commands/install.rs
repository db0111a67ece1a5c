//! # Install Command Implementation
//!
//! This module implements the `install` subcommand, which fetches every
//! git-sourced subcomponent in the tree.
//!
//! ## Functionality
//!
//! The tree is walked breadth-first. Each component's git subcomponents are
//! cloned into its `components/` directory from the traversal callback, which
//! runs before those subcomponents are dequeued. Freshly cloned descriptors are
//! therefore in place by the time the traversal loads them, and their own
//! subcomponents are installed in turn.
//!
//! Existing installs are removed and cloned again.

use anyhow::{Context, Result};
use clap::Args;

use component_tree::defaults::GIT_METHOD;
use component_tree::output::OutputConfig;
use component_tree::traversal::iterate_component_tree;

use super::TraversalArgs;

/// Install git subcomponents across the whole component tree
#[derive(Args, Debug)]
pub struct InstallArgs {
    #[command(flatten)]
    pub traversal: TraversalArgs,
}

/// Execute the `install` command.
pub fn execute(args: InstallArgs, output: &OutputConfig) -> Result<()> {
    let root = &args.traversal.path;

    println!(
        "{} Installing component tree at {}",
        output.emoji("📦", "[INSTALL]"),
        root.display()
    );

    let mut installed = 0;
    let components = iterate_component_tree(
        root,
        &args.traversal.environment,
        |path, component| {
            component.install(path).with_context(|| {
                format!(
                    "Failed to install subcomponents of '{}'",
                    component.logical_path
                )
            })?;
            installed += component
                .subcomponents
                .iter()
                .filter(|s| s.method == GIT_METHOD)
                .count();
            Ok(())
        },
    )
    .with_context(|| format!("Failed to install component tree at {}", root.display()))?;

    println!(
        "{} Resolved {} components, installed {} from git",
        output.emoji("✅", "[OK]"),
        components.len(),
        installed
    );

    Ok(())
}
