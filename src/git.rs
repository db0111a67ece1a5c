//! Git operations for installing subcomponents
//!
//! Cloning is expressed through the `GitOperations` trait so the installer can
//! be exercised in tests without a network or a `git` binary. `SystemGit`
//! is the real implementation and shells out to the system `git` command,
//! which automatically handles:
//! - SSH keys from ~/.ssh/
//! - Git credential helpers
//! - Any authentication configured in ~/.gitconfig

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Trait for git operations - allows mocking in tests
pub trait GitOperations {
    /// Clone `url` into `target_dir`. The target must not already exist.
    fn clone_repository(&self, url: &str, target_dir: &Path) -> Result<()>;
}

/// `GitOperations` backed by the system `git` command.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemGit;

impl GitOperations for SystemGit {
    fn clone_repository(&self, url: &str, target_dir: &Path) -> Result<()> {
        clone(url, target_dir)
    }
}

/// Run `git clone <url> <target_dir>`.
pub fn clone(url: &str, target_dir: &Path) -> Result<()> {
    let output = Command::new("git")
        .arg("clone")
        .arg(url)
        .arg(target_dir)
        .output()
        .map_err(|e| Error::GitClone {
            url: url.to_string(),
            message: e.to_string(),
            hint: Some("Make sure git is installed and on PATH".to_string()),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::GitClone {
            url: url.to_string(),
            message: stderr.trim().to_string(),
            hint: clone_failure_hint(&stderr),
        });
    }

    Ok(())
}

/// Suggest a fix for common clone failures.
fn clone_failure_hint(stderr: &str) -> Option<String> {
    if stderr.contains("Authentication failed")
        || stderr.contains("Permission denied")
        || stderr.contains("Could not read from remote repository")
    {
        Some(
            "Make sure you have access to the repository: add your SSH key to \
             ssh-agent or configure git credentials"
                .to_string(),
        )
    } else if stderr.contains("already exists and is not an empty directory") {
        Some("Remove the existing directory before cloning".to_string())
    } else {
        None
    }
}
