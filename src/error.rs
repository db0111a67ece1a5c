//! # Error Handling
//!
//! This module defines the centralized error type for `component-tree`. It
//! uses the `thiserror` library to build an `Error` enum whose variants map
//! onto the stages of resolving a component tree, so a propagated error always
//! says which stage failed:
//!
//! - Descriptor lookup (`NotFound`).
//! - Descriptor and overlay parsing (`Parse`).
//! - Filesystem reads (`Io`).
//! - Subcomponent installation (`Install`, `GitClone`).
//! - The caller's per-node callback (`Callback`).
//! - Self-referencing component trees (`CycleDetected`).
//!
//! The `Result` type alias is used throughout the library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for component-tree operations
#[derive(Error, Debug)]
pub enum Error {
    /// A component descriptor was expected at a computed physical path but
    /// does not exist.
    #[error("Component expected at path {} not found", path.display())]
    NotFound { path: PathBuf },

    /// A descriptor or overlay file exists but is not valid JSON for the
    /// expected shape.
    #[error("Parse error in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Preparing the install location for a subcomponent failed.
    #[error("Install error for {component} at {}: {message}", path.display())]
    Install {
        component: String,
        path: PathBuf,
        message: String,
    },

    /// Cloning a git-sourced subcomponent failed.
    #[error("Git clone error for {url}: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    GitClone {
        url: String,
        message: String,
        /// Optional hint for how to resolve the clone issue
        hint: Option<String>,
    },

    /// The caller-supplied per-node callback returned an error.
    #[error("Callback failed for component {logical_path}: {source}")]
    Callback {
        logical_path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// A subcomponent's source already appears among its own ancestors.
    #[error("Cycle detected in component tree: {cycle}")]
    CycleDetected { cycle: String },
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Builds a `Parse` error from a `serde_json` failure on `path`.
    pub(crate) fn parse(path: impl Into<PathBuf>, err: serde_json::Error) -> Self {
        Error::Parse {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
