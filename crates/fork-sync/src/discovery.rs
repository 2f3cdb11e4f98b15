//! File discovery strategies
//!
//! A strategy turns a source root into the list of files a sync run should
//! consider. Two strategies exist:
//!
//! - [`StatusDiscovery`] asks version control what changed. Used when
//!   pulling a developer's edits out of a full checkout, where only the
//!   delta matters.
//! - [`RecursiveDiscovery`] takes every file under the root. Used when
//!   pushing the curated tree into a checkout, since every file in the
//!   curated tree is a modification.

use std::path::{Path, PathBuf};

use fork_git::{StatusLine, StatusProvider};
use walkdir::WalkDir;

use crate::{ChangeKind, DiscoveredEntry, Error, Result, UntrackedFilesMode};

/// Produces the entries of one sync run.
pub trait FileDiscovery {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Discover the files under `source_root`, as paths relative to it.
    fn discover(&self, source_root: &Path) -> Result<Vec<DiscoveredEntry>>;
}

/// Discovery driven by the working tree's version-control status.
pub struct StatusDiscovery<P> {
    provider: P,
    untracked: UntrackedFilesMode,
}

impl<P: StatusProvider> StatusDiscovery<P> {
    pub fn new(provider: P, untracked: UntrackedFilesMode) -> Self {
        Self {
            provider,
            untracked,
        }
    }
}

impl<P: StatusProvider> FileDiscovery for StatusDiscovery<P> {
    fn name(&self) -> &'static str {
        "status"
    }

    fn discover(&self, source_root: &Path) -> Result<Vec<DiscoveredEntry>> {
        tracing::debug!(
            provider = self.provider.name(),
            root = %source_root.display(),
            "Querying version-control status"
        );
        let lines = self.provider.status(source_root)?;
        entries_from_status(source_root, &lines, self.untracked)
    }
}

/// Turn status lines into entries, applying the untracked-files policy and
/// expanding directories into the files they contain.
pub fn entries_from_status(
    source_root: &Path,
    lines: &[StatusLine],
    untracked: UntrackedFilesMode,
) -> Result<Vec<DiscoveredEntry>> {
    let mut entries = Vec::with_capacity(lines.len());

    for line in lines {
        let kind =
            ChangeKind::from_status_code(&line.code).ok_or_else(|| Error::UnsupportedStatus {
                code: line.code.clone(),
                path: line.path.clone(),
            })?;
        let full_path = source_root.join(&line.path);

        if kind == ChangeKind::Untracked {
            match untracked {
                UntrackedFilesMode::NotAllowed => {
                    return Err(Error::UntrackedFileFound { path: full_path });
                }
                UntrackedFilesMode::Ignored => {
                    tracing::info!(path = %full_path.display(), "Ignoring untracked file");
                    continue;
                }
                UntrackedFilesMode::Allowed => {}
            }
        }

        if full_path.is_dir() {
            if kind == ChangeKind::Deleted {
                return Err(Error::DeletedUnsupported { path: full_path });
            }
            tracing::debug!(dir = %full_path.display(), "Expanding directory entry");
            for file in walk_files(&full_path)? {
                entries.push(DiscoveredEntry::new(
                    relative_to(&file, source_root),
                    ChangeKind::Added,
                ));
            }
        } else {
            entries.push(DiscoveredEntry::new(line.path.clone(), kind));
        }
    }

    Ok(entries)
}

/// Discovery that takes every file under the source root.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveDiscovery;

impl RecursiveDiscovery {
    pub fn new() -> Self {
        Self
    }
}

impl FileDiscovery for RecursiveDiscovery {
    fn name(&self) -> &'static str {
        "recursive"
    }

    fn discover(&self, source_root: &Path) -> Result<Vec<DiscoveredEntry>> {
        Ok(walk_files(source_root)?
            .into_iter()
            .map(|file| DiscoveredEntry::new(relative_to(&file, source_root), ChangeKind::Added))
            .collect())
    }
}

/// Every file (never a directory) below `root`, recursively.
///
/// Symlinked directories are not descended into; a symlink to a file counts
/// as a file.
pub fn walk_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::Walk {
            path: e.path().unwrap_or(root).to_path_buf(),
            message: e.to_string(),
        })?;
        if entry.path().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn relative_to(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
