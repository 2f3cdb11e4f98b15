//! Path resolution helpers

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Resolve `path` to an absolute form suitable for comparing roots.
///
/// Existing paths are canonicalized (symlinks resolved, no UNC prefix on
/// Windows). Paths that do not exist yet are made absolute against the
/// current directory without touching the filesystem.
pub fn resolve_absolute(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        dunce::canonicalize(path).map_err(|e| Error::io(path, e))
    } else {
        std::path::absolute(path).map_err(|e| Error::io(path, e))
    }
}

/// Name of the final component of `path`, if it is valid UTF-8.
pub fn dir_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}

/// Name of the parent directory of `path`, if any.
pub fn parent_name(path: &Path) -> Option<&str> {
    path.parent().and_then(dir_name)
}
