//! Component tree traversal
//!
//! `iterate_component_tree` is the general walk used for installing,
//! generating or inspecting a deployment tree. It starts from a directory that
//! must contain a `component.json` and visits every sourced component
//! reachable from it, breadth-first.
//!
//! ## Process
//!
//! For each component taken off the FIFO queue:
//!
//! 1.  **Load**: read the descriptor at its physical path and merge in the
//!     configuration pushed down by its parent. A missing descriptor is an
//!     error; any path pushed onto the queue must have one by the time it is
//!     dequeued.
//! 2.  **Configure**: layer `config/<environment>.json` and
//!     `config/common.json` on top.
//! 3.  **Dispatch**: hand the component to the caller's callback.
//! 4.  **Record**: append it to the completed list.
//! 5.  **Enqueue**: queue a stub for every sourced subcomponent. Inline
//!     subcomponents are described by the parent's own descriptor and are
//!     never visited separately.
//!
//! The first error at any step aborts the whole walk and no partial results
//! are returned.
//!
//! ## Cycle Detection
//!
//! Each queued stub remembers the git sources of its ancestors. A git
//! subcomponent whose source already appears in that chain aborts the walk
//! with `Error::CycleDetected`, since installing it would clone the same
//! repository into itself without end. Other sourced subcomponents may share
//! a source (several charts from one chart repository); each lives at its own
//! deeper directory, so they are not checked. Separately, a physical path is
//! never visited twice.

use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::component::Component;
use crate::config::ComponentConfig;
use crate::defaults::{GIT_METHOD, ROOT_LOGICAL_PATH};
use crate::error::{Error, Result};
use crate::path::{join_logical, join_physical};

/// A stub waiting in the queue, with the git sources of its ancestors.
struct QueuedComponent {
    component: Component,
    lineage: Vec<String>,
}

/// Walk the component tree rooted at `root`, calling `callback` once per
/// component in breadth-first order.
///
/// The callback receives the component's physical path and a mutable
/// reference to the fully merged component. Changes it makes are kept in the
/// returned list and, for `subcomponents`, decide what gets enqueued next.
/// The returned list starts with the root and follows visitation order.
pub fn iterate_component_tree<F>(
    root: &Path,
    environment: &str,
    mut callback: F,
) -> Result<Vec<Component>>
where
    F: FnMut(&Path, &mut Component) -> anyhow::Result<()>,
{
    let mut queue = VecDeque::new();
    queue.push_back(QueuedComponent {
        component: Component::stub(
            "",
            root,
            ROOT_LOGICAL_PATH,
            ComponentConfig::default(),
        ),
        lineage: Vec::new(),
    });

    let mut visited: HashSet<PathBuf> = HashSet::new();
    let mut completed_components = Vec::new();

    while let Some(QueuedComponent { component, lineage }) = queue.pop_front() {
        if !visited.insert(component.physical_path.clone()) {
            debug!(
                "skipping '{}': {} was already visited",
                component.logical_path,
                component.physical_path.display()
            );
            continue;
        }

        let mut component = component.load()?;
        component.load_config(environment)?;

        info!(
            "visiting component '{}' at {}",
            component.logical_path,
            component.physical_path.display()
        );

        let physical_path = component.physical_path.clone();
        callback(&physical_path, &mut component).map_err(|source| Error::Callback {
            logical_path: component.logical_path.clone(),
            source: source.into(),
        })?;

        for subcomponent in &component.subcomponents {
            if subcomponent.is_inline() {
                continue;
            }

            let is_git = subcomponent.method == GIT_METHOD;
            if is_git && lineage.contains(&subcomponent.source) {
                let mut cycle = lineage.clone();
                cycle.push(subcomponent.source.clone());
                return Err(Error::CycleDetected {
                    cycle: cycle.join(" -> "),
                });
            }

            let queued = Component::stub(
                subcomponent.name.clone(),
                join_physical(&component.physical_path, &subcomponent.relative_path_to()),
                join_logical(&component.logical_path, &subcomponent.name),
                component.config.subcomponent(&subcomponent.name),
            );

            debug!(
                "adding subcomponent '{}' to queue with physical path '{}' and logical path '{}'",
                queued.name,
                queued.physical_path.display(),
                queued.logical_path
            );

            let mut child_lineage = lineage.clone();
            if is_git {
                child_lineage.push(subcomponent.source.clone());
            }
            queue.push_back(QueuedComponent {
                component: queued,
                lineage: child_lineage,
            });
        }

        completed_components.push(component);
    }

    Ok(completed_components)
}
