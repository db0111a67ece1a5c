//! Path resolution for subcomponents
//!
//! A subcomponent's location relative to its parent depends on how it is
//! acquired:
//!
//! - `git` components are cloned under `components/<name>`.
//! - other sourced components live in `<name>` next to the parent descriptor.
//! - inline components (no source) share the parent's directory, `./`.
//!
//! Logical paths are slash-separated names from the tree root (`./`) and never
//! touch the filesystem.

use std::path::{Component as PathComponent, Path, PathBuf};

use crate::component::Component;
use crate::defaults::{COMPONENTS_DIR, GIT_METHOD, ROOT_LOGICAL_PATH};

/// Compute where `declaration` lives relative to its parent component.
pub fn relative_path_to(declaration: &Component) -> String {
    if declaration.method == GIT_METHOD {
        format!("{}/{}", COMPONENTS_DIR, declaration.name)
    } else if !declaration.source.is_empty() {
        declaration.name.clone()
    } else {
        ROOT_LOGICAL_PATH.to_string()
    }
}

/// Join a relative path onto a physical base, dropping `.` segments.
pub fn join_physical(base: &Path, relative: &str) -> PathBuf {
    let mut joined = base.to_path_buf();
    for part in Path::new(relative).components() {
        match part {
            PathComponent::CurDir => {}
            other => joined.push(other.as_os_str()),
        }
    }
    joined
}

/// Join a child name onto a logical path.
///
/// The root `./` contributes no segment, so the root's child `web` has the
/// logical path `web` and its grandchild `web/db`.
pub fn join_logical(base: &str, name: &str) -> String {
    let joined = base
        .split('/')
        .chain(name.split('/'))
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/");

    if joined.is_empty() {
        ROOT_LOGICAL_PATH.to_string()
    } else {
        joined
    }
}
