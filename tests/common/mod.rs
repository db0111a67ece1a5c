//! Shared test utilities for integration and E2E tests.
//!
//! This module provides fixtures and helper functions to build component
//! trees on disk.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_descriptor("./", descriptors::LEAF);
//!     // ... test code
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::descriptors;
    #[allow(unused_imports)]
    pub use super::git_available;
    pub use super::TestFixture;
}

/// Common `component.json` snippets for testing.
#[allow(dead_code)]
pub mod descriptors {
    /// A component with no subcomponents.
    pub const LEAF: &str = r#"{"Name": "leaf"}"#;

    /// The root used by the missing-descriptor scenario: one inline and one
    /// git subcomponent.
    pub const ROOT_WITH_INLINE_AND_GIT: &str = r#"{
  "Name": "root",
  "Subcomponents": [
    {"Name": "assets"},
    {"Name": "web", "Source": "https://example/web.git", "Method": "git"}
  ]
}"#;

    /// Malformed JSON for error testing.
    pub const INVALID_JSON: &str = r#"{"Name": "#;
}

/// Check whether a `git` binary can be run.
#[allow(dead_code)]
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// A test fixture that provides a temporary directory holding a component
/// tree.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new()
///     .with_descriptor("./", descriptors::ROOT_WITH_INLINE_AND_GIT)
///     .with_file("config/common.json", r#"{"Config": {"port": 80}}"#);
///
/// fixture.command().arg("tree").assert().failure();
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write a `component.json` into the component directory `dir`, relative
    /// to the fixture root (`./` for the root itself).
    pub fn with_descriptor(self, dir: &str, content: &str) -> Self {
        let path = Path::new(dir).join("component.json");
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write descriptor");
        self
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the fixture.
    #[allow(dead_code)]
    pub fn join(&self, relative: &str) -> PathBuf {
        self.temp_dir.path().join(relative)
    }

    /// Create a command configured to run in this fixture's directory.
    #[allow(dead_code)]
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("component-tree");
        cmd.current_dir(self.path())
            .env_remove("COMPONENT_TREE_ENV")
            .env_remove("COMPONENT_TREE_LOG")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_with_descriptor() {
        let fixture = TestFixture::new().with_descriptor("components/web", descriptors::LEAF);
        assert!(fixture.join("components/web/component.json").exists());
    }

    #[test]
    fn test_descriptors_are_valid_json() {
        for descriptor in [descriptors::LEAF, descriptors::ROOT_WITH_INLINE_AND_GIT] {
            serde_json::from_str::<serde_json::Value>(descriptor)
                .expect("Descriptor should be valid JSON");
        }
        assert!(serde_json::from_str::<serde_json::Value>(descriptors::INVALID_JSON).is_err());
    }
}
