//! Root-shape checks run before any sync
//!
//! Refuses to sync a tree onto itself and refuses pairs of directories that
//! do not look like a chromium checkout or the curated modifications tree.

use std::path::Path;

use fork_fs::path::{dir_name, parent_name};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Allow-list of directory names that identify a sync root.
///
/// A root is recognized when its own name is in `names` or its parent's
/// name is in `parents`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootMarkers {
    pub names: Vec<String>,
    pub parents: Vec<String>,
}

impl Default for RootMarkers {
    fn default() -> Self {
        Self {
            names: vec!["src".into()],
            parents: vec!["chromium".into(), "chromium-modifications".into()],
        }
    }
}

impl RootMarkers {
    pub fn recognizes(&self, root: &Path) -> bool {
        let name_matches = dir_name(root).is_some_and(|n| self.names.iter().any(|m| m == n));
        let parent_matches = parent_name(root).is_some_and(|n| self.parents.iter().any(|m| m == n));
        name_matches || parent_matches
    }
}

/// Check a source/target pair before syncing.
///
/// Fails when both resolve to the same directory, or when neither of them
/// is recognized by `markers`.
pub fn validate_roots(source_root: &Path, target_root: &Path, markers: &RootMarkers) -> Result<()> {
    let source = fork_fs::resolve_absolute(source_root)?;
    let target = fork_fs::resolve_absolute(target_root)?;

    if source == target {
        return Err(Error::IdenticalRoots { path: source });
    }

    if !markers.recognizes(&source) && !markers.recognizes(&target) {
        return Err(Error::InvalidRootShape {
            source_root: source,
            target_root: target,
        });
    }

    Ok(())
}
