//! Subcomponent installation
//!
//! Installing a component fetches its immediate git-sourced subcomponents
//! into `<install path>/components/<name>`. Any previous install at that
//! location is removed first so every install starts from a fresh clone.
//! Subcomponents acquired by other methods, and inline ones, are left alone.
//!
//! Installation is not recursive. The traversal engine reaches each installed
//! child in turn, and the CLI's `install` command installs that child's own
//! subcomponents from its callback.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{debug, info};

use crate::component::Component;
use crate::defaults::{COMPONENTS_DIR, GIT_METHOD};
use crate::error::{Error, Result};
use crate::git::GitOperations;
use crate::path::join_physical;

/// Install `component`'s git subcomponents under `install_path`.
///
/// Stops at the first failure; nothing is retried.
pub fn install(component: &Component, install_path: &Path, git: &dyn GitOperations) -> Result<()> {
    for subcomponent in &component.subcomponents {
        if subcomponent.method != GIT_METHOD {
            continue;
        }

        check_install_name(&subcomponent.name, install_path)?;

        let components_path = install_path.join(COMPONENTS_DIR);
        fs::create_dir_all(&components_path).map_err(|e| Error::Install {
            component: subcomponent.name.clone(),
            path: components_path.clone(),
            message: format!("failed to create components directory: {}", e),
        })?;

        let subcomponent_path = join_physical(install_path, &subcomponent.relative_path_to());
        remove_stale_install(&subcomponent_path).map_err(|e| Error::Install {
            component: subcomponent.name.clone(),
            path: subcomponent_path.clone(),
            message: format!("failed to remove previous install: {}", e),
        })?;

        info!(
            "🚁 installing component {} with git from {}",
            subcomponent.name, subcomponent.source
        );
        git.clone_repository(&subcomponent.source, &subcomponent_path)?;
    }

    Ok(())
}

/// Reject names that would not resolve to a single directory directly under
/// `components/`.
fn check_install_name(name: &str, install_path: &Path) -> Result<()> {
    let reason = if name.is_empty() {
        Some("name is empty")
    } else if name == "." || name == ".." {
        Some("name refers to a parent or current directory")
    } else if name.contains(['/', '\\']) {
        Some("name contains a path separator")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(Error::Install {
            component: name.to_string(),
            path: install_path.join(COMPONENTS_DIR),
            message: format!("invalid subcomponent name: {}", reason),
        }),
        None => Ok(()),
    }
}

/// Remove whatever sits at `path`: a directory tree, a file or a symlink
/// (dangling or not, the link itself is removed).
fn remove_stale_install(path: &Path) -> std::io::Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(()),
        Err(err) => return Err(err),
    };

    debug!("Removing stale install at {}", path.display());
    if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}
