//! # Component Tree Library
//!
//! This library resolves a tree of deployable components declared by
//! `component.json` descriptor files. It merges each component's
//! configuration across parent overrides and environment overlays, walks the
//! tree breadth-first, and installs git-sourced subcomponents. It is used by
//! the `component-tree` command-line tool, and callers can plug their own
//! per-component work (code generation, template rendering, validation) into
//! the traversal.
//!
//! ## Quick Example
//!
//! ```no_run
//! use component_tree::traversal::iterate_component_tree;
//! use std::path::Path;
//!
//! let components = iterate_component_tree(Path::new("."), "production", |path, component| {
//!     println!("{} at {}", component.logical_path, path.display());
//!     Ok(())
//! })?;
//! println!("resolved {} components", components.len());
//! # Ok::<(), component_tree::error::Error>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Components (`component`)**: The node model, the descriptor loader and
//!   the environment overlay loader.
//! - **Configuration (`config`, `merge`)**: `ComponentConfig` and the
//!   gap-filling merge that layers configuration from most to least specific.
//! - **Path Resolution (`path`)**: Where a subcomponent lives relative to its
//!   parent, depending on how it is acquired.
//! - **Traversal (`traversal`)**: The breadth-first walk that loads, merges
//!   and dispatches every component exactly once.
//! - **Installation (`install`, `git`)**: Fresh clones of git-sourced
//!   subcomponents into `components/<name>`.
//!
//! ## Execution Flow
//!
//! `traversal::iterate_component_tree` seeds a queue with the root directory
//! and, for each dequeued component:
//!
//! 1.  **Load**: Parse `component.json` and merge in the parent's override.
//! 2.  **Configure**: Layer `config/<environment>.json` and `config/common.json`.
//! 3.  **Dispatch**: Run the caller's callback.
//! 4.  **Enqueue**: Queue every sourced subcomponent at its resolved path.
//!
//! The first error at any step aborts the walk.

pub mod component;
pub mod config;
pub mod defaults;
pub mod error;
pub mod git;
pub mod install;
pub mod merge;
pub mod output;
pub mod path;
pub mod traversal;

#[cfg(test)]
mod path_proptest;

pub use component::Component;
pub use config::ComponentConfig;
pub use error::{Error, Result};
pub use traversal::iterate_component_tree;
