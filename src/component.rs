//! # Components
//!
//! A `Component` is one node of the deployment tree. Each component lives in
//! a directory holding a `component.json` descriptor that declares its
//! identity, how it is acquired, its children and its default configuration:
//!
//! ```json
//! {
//!   "Name": "frontend",
//!   "Subcomponents": [
//!     { "Name": "assets" },
//!     { "Name": "web", "Source": "https://example.com/web.git", "Method": "git" }
//!   ],
//!   "Config": { "replicas": 2 }
//! }
//! ```
//!
//! Entries of `Subcomponents` are declarations, not resolved nodes. The
//! traversal engine turns each sourced declaration into a stub carrying only a
//! name, its physical and logical paths and the configuration pushed down from
//! the parent, then completes the stub with [`Component::load`] and
//! [`Component::load_config`] when it is dequeued.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::{self, null_as_default, ComponentConfig};
use crate::defaults::{overlay_file_name, COMMON_ENVIRONMENT, CONFIG_DIR, DESCRIPTOR_FILE};
use crate::error::{Error, Result};
use crate::git::SystemGit;

/// A node in the deployment tree.
///
/// Descriptor keys are PascalCase (`"Name"`); lowercase and camelCase
/// spellings are accepted too. A `null` value reads as the field's default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Component {
    /// Identifier, unique among siblings.
    #[serde(alias = "name", deserialize_with = "null_as_default")]
    pub name: String,
    /// Acquisition origin, e.g. a git URL. Empty for inline components.
    #[serde(alias = "source", deserialize_with = "null_as_default")]
    pub source: String,
    /// Acquisition mechanism, e.g. `git`.
    #[serde(alias = "method", deserialize_with = "null_as_default")]
    pub method: String,

    #[serde(alias = "generator", deserialize_with = "null_as_default")]
    pub generator: String,
    /// Child declarations in descriptor order.
    #[serde(alias = "subcomponents", deserialize_with = "null_as_default")]
    pub subcomponents: Vec<Component>,
    #[serde(alias = "repo", deserialize_with = "null_as_default")]
    pub repo: String,
    #[serde(alias = "path", deserialize_with = "null_as_default")]
    pub path: String,
    /// Directory holding this component's descriptor. Assigned by traversal.
    #[serde(
        alias = "physicalPath",
        alias = "physicalpath",
        deserialize_with = "null_as_default"
    )]
    pub physical_path: PathBuf,
    /// Name path from the tree root (`./`). Assigned by traversal.
    #[serde(
        alias = "logicalPath",
        alias = "logicalpath",
        deserialize_with = "null_as_default"
    )]
    pub logical_path: String,
    #[serde(alias = "config", deserialize_with = "null_as_default")]
    pub config: ComponentConfig,

    #[serde(alias = "manifest", deserialize_with = "null_as_default")]
    pub manifest: String,
}

impl Component {
    /// Create the stub the traversal engine queues for a node.
    pub fn stub(
        name: impl Into<String>,
        physical_path: impl Into<PathBuf>,
        logical_path: impl Into<String>,
        config: ComponentConfig,
    ) -> Self {
        Self {
            name: name.into(),
            physical_path: physical_path.into(),
            logical_path: logical_path.into(),
            config,
            ..Default::default()
        }
    }

    /// Path of the descriptor file for this component.
    pub fn descriptor_path(&self) -> PathBuf {
        self.physical_path.join(DESCRIPTOR_FILE)
    }

    /// True when this declaration has no source and so shares its parent's
    /// directory and descriptor.
    pub fn is_inline(&self) -> bool {
        self.source.is_empty()
    }

    /// Location of this declaration relative to its parent.
    pub fn relative_path_to(&self) -> String {
        crate::path::relative_path_to(self)
    }

    /// Read this component's descriptor and merge the pending configuration
    /// into it.
    ///
    /// The returned component takes its physical and logical paths from
    /// `self`, whatever the descriptor declares. The descriptor's own
    /// `Config` wins over the pending configuration.
    pub fn load(&self) -> Result<Component> {
        let descriptor_path = self.descriptor_path();
        let content = match fs::read_to_string(&descriptor_path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(Error::NotFound {
                    path: descriptor_path,
                })
            }
            Err(err) => return Err(Error::Io(err)),
        };

        let mut loaded: Component =
            serde_json::from_str(&content).map_err(|err| Error::parse(&descriptor_path, err))?;

        debug!(
            "Loaded component '{}' from {}",
            loaded.name,
            descriptor_path.display()
        );

        loaded.physical_path = self.physical_path.clone();
        loaded.logical_path = self.logical_path.clone();
        loaded.config.merge(&self.config);

        Ok(loaded)
    }

    /// Merge an optional overlay file into this component's configuration.
    ///
    /// A missing file is not an error.
    pub fn merge_config_file(&mut self, path: &Path) -> Result<()> {
        if let Some(overlay) = config::from_file(path)? {
            debug!(
                "Merging config overlay {} into '{}'",
                path.display(),
                self.logical_path
            );
            self.config.merge(&overlay);
        }
        Ok(())
    }

    /// Layer `config/<environment>.json` and then `config/common.json` onto
    /// this component's configuration.
    pub fn load_config(&mut self, environment: &str) -> Result<()> {
        let config_dir = self.physical_path.join(CONFIG_DIR);

        if !environment.is_empty() {
            self.merge_config_file(&config_dir.join(overlay_file_name(environment)))?;
        }

        self.merge_config_file(&config_dir.join(overlay_file_name(COMMON_ENVIRONMENT)))
    }

    /// Install this component's git subcomponents under `install_path` using
    /// the system `git` binary.
    pub fn install(&self, install_path: &Path) -> Result<()> {
        crate::install::install(self, install_path, &SystemGit)
    }
}
