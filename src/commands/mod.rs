//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `component-tree` command-line tool. Each subcommand lives in its own file.
//!
//! ## Structure
//!
//! Each command module contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic by calling into the `component_tree` library.
//!
//! Every command walks the component tree, so the root path and environment
//! arguments are shared through `TraversalArgs`.

use clap::Args;
use std::path::PathBuf;

use component_tree::defaults::DEFAULT_ENVIRONMENT;

pub mod install;
pub mod show;
pub mod tree;

/// Arguments shared by every command that walks the component tree.
#[derive(Args, Debug, Clone)]
pub struct TraversalArgs {
    /// Directory containing the root `component.json`.
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Environment whose `config/<ENV>.json` overlays are applied.
    ///
    /// `config/common.json` is always applied after it.
    #[arg(
        short,
        long,
        value_name = "ENV",
        env = "COMPONENT_TREE_ENV",
        default_value = DEFAULT_ENVIRONMENT
    )]
    pub environment: String,
}
