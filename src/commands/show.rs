//! # Show Command Implementation
//!
//! This module implements the `show` subcommand, which prints the fully
//! merged configuration of every component, in traversal order.
//!
//! The output is a list of `{ logical_path, physical_path, name, config }`
//! records, rendered as JSON (default) or YAML.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

use component_tree::component::Component;
use component_tree::config::ComponentConfig;
use component_tree::traversal::iterate_component_tree;

use super::TraversalArgs;

/// Output format for `show`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

/// Print the fully merged configuration of every component
#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub traversal: TraversalArgs,

    /// Output format.
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: Format,
}

#[derive(Serialize, Debug)]
struct ResolvedComponent<'a> {
    logical_path: &'a str,
    physical_path: &'a PathBuf,
    name: &'a str,
    config: &'a ComponentConfig,
}

impl<'a> From<&'a Component> for ResolvedComponent<'a> {
    fn from(component: &'a Component) -> Self {
        Self {
            logical_path: &component.logical_path,
            physical_path: &component.physical_path,
            name: &component.name,
            config: &component.config,
        }
    }
}

/// Execute the `show` command.
pub fn execute(args: ShowArgs) -> Result<()> {
    let rendered = render(&args)?;
    println!("{}", rendered);
    Ok(())
}

fn render(args: &ShowArgs) -> Result<String> {
    let root = &args.traversal.path;
    let components = iterate_component_tree(root, &args.traversal.environment, |_, _| Ok(()))
        .with_context(|| format!("Failed to resolve component tree at {}", root.display()))?;

    let resolved: Vec<ResolvedComponent> = components.iter().map(ResolvedComponent::from).collect();

    let rendered = match args.format {
        Format::Json => serde_json::to_string_pretty(&resolved)?,
        Format::Yaml => serde_yaml::to_string(&resolved)?,
    };
    Ok(rendered)
}
