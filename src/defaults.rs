//! Default values for component-tree.
//!
//! This module centralizes the file names, directory names and defaults shared
//! by the library and the CLI.

/// File name of the descriptor expected in every component directory.
pub const DESCRIPTOR_FILE: &str = "component.json";

/// Directory, relative to a component, holding its overlay files.
pub const CONFIG_DIR: &str = "config";

/// Overlay applied after the environment-specific one.
pub const COMMON_ENVIRONMENT: &str = "common";

/// Environment used when none is given on the command line.
pub const DEFAULT_ENVIRONMENT: &str = COMMON_ENVIRONMENT;

/// Directory, relative to a component, where git subcomponents are cloned.
pub const COMPONENTS_DIR: &str = "components";

/// Acquisition method that triggers a git clone.
pub const GIT_METHOD: &str = "git";

/// Logical path of the traversal root.
pub const ROOT_LOGICAL_PATH: &str = "./";

/// File name of the overlay for `environment`.
pub fn overlay_file_name(environment: &str) -> String {
    format!("{}.json", environment)
}
