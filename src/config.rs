//! # Component Configuration
//!
//! This module defines `ComponentConfig`, the configuration carried by every
//! component in the tree, and the merge engine that layers one configuration
//! over another.
//!
//! A `ComponentConfig` has two parts:
//!
//! - **`config`**: the component's own settings, an arbitrary JSON object.
//! - **`subcomponents`**: per-child overrides, keyed by child name. When the
//!   traversal later reaches that child, the matching entry is pushed down and
//!   merged into the child's configuration.
//!
//! On disk the shape is:
//!
//! ```json
//! {
//!   "Config": { "port": 80 },
//!   "Subcomponents": {
//!     "db": { "Config": { "replicas": 3 } }
//!   }
//! }
//! ```
//!
//! ## Merge Policy
//!
//! `ComponentConfig::merge` is gap-filling: values already present in the
//! receiver win, the overlay only supplies what is missing, and nested
//! objects merge recursively (see [`crate::merge`]). The empty config is the
//! identity on both sides. Callers apply layers from most to least specific:
//!
//! 1. the descriptor's own `Config`
//! 2. the override pushed down by the parent
//! 3. `config/<environment>.json`
//! 4. `config/common.json`

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::trace;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::merge::fill_json_map;

/// A configuration value plus nested overrides for named children.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentConfig {
    /// This component's own settings.
    #[serde(
        rename = "Config",
        alias = "config",
        default,
        deserialize_with = "null_as_default"
    )]
    pub config: Map<String, Value>,

    /// Overrides to push down to children, keyed by child name.
    #[serde(
        rename = "Subcomponents",
        alias = "subcomponents",
        default,
        deserialize_with = "null_as_default"
    )]
    pub subcomponents: BTreeMap<String, ComponentConfig>,
}

/// Deserialize a field, reading an explicit `null` as its default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ComponentConfig {
    /// Returns true when neither own settings nor child overrides are set.
    pub fn is_empty(&self) -> bool {
        self.config.is_empty() && self.subcomponents.is_empty()
    }

    /// Merge `overlay` into `self`, keeping every value `self` already has.
    pub fn merge(&mut self, overlay: &ComponentConfig) {
        fill_json_map(&mut self.config, &overlay.config);

        for (name, child_overlay) in &overlay.subcomponents {
            match self.subcomponents.get_mut(name) {
                Some(child) => child.merge(child_overlay),
                None => {
                    self.subcomponents
                        .insert(name.clone(), child_overlay.clone());
                }
            }
        }
    }

    /// The override to push down to the child called `name`, or the empty
    /// config when none was declared.
    pub fn subcomponent(&self, name: &str) -> ComponentConfig {
        self.subcomponents.get(name).cloned().unwrap_or_default()
    }

    /// Look up one of this component's own settings.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.config.get(key)
    }
}

/// Parses a JSON string into a `ComponentConfig`.
pub fn parse(json: &str) -> serde_json::Result<ComponentConfig> {
    serde_json::from_str(json)
}

/// Read an optional overlay file.
///
/// Returns `Ok(None)` when the file does not exist. A file that exists but
/// cannot be read is an `Error::Io`; one that does not parse is an
/// `Error::Parse`.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Option<ComponentConfig>> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            trace!("No config overlay at {}", path.display());
            return Ok(None);
        }
        Err(err) => return Err(Error::Io(err)),
    };

    parse(&content)
        .map(Some)
        .map_err(|err| Error::parse(path, err))
}
