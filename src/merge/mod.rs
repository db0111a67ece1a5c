//! Merge operations for component configuration
//!
//! Component configuration is layered from several files (the descriptor, the
//! parent's push-down overrides, the environment overlay, `common.json`). Every
//! layer is JSON, so the value-level merge lives in the `json` submodule and
//! `ComponentConfig::merge` builds on it.
//!
//! ## Precedence
//!
//! Merging is gap-filling: whatever the target already holds wins, and the
//! source only contributes keys the target lacks. Objects present on both
//! sides are merged recursively. Applying layers from most specific to least
//! specific therefore yields most-specific-wins.

pub mod json;

pub use json::{fill_json_map, fill_json_value};
