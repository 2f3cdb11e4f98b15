//! SyncEngine implementation
//!
//! Copies discovered files from a source root to a target root. A file is
//! written only when the target is missing or its digest differs from the
//! source. Copies keep the source's metadata so the target tree does not
//! look wholesale modified to version control afterwards.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::discovery::FileDiscovery;
use crate::safety::{RootMarkers, validate_roots};
use crate::{ChangeKind, DiscoveredEntry, Error, Result};

/// Options for a sync run
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// If true, log every write without performing it. Reads (existence
    /// checks, digests) still run against the real filesystem.
    pub dry_run: bool,
}

/// A filesystem action taken (or, under dry-run, planned) by a sync run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SyncAction {
    CreateDir { path: PathBuf },
    Copy { from: PathBuf, to: PathBuf },
    Unchanged { path: PathBuf },
}

impl fmt::Display for SyncAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateDir { path } => write!(f, "create directory {}", path.display()),
            Self::Copy { from, to } => write!(f, "copy {} -> {}", from.display(), to.display()),
            Self::Unchanged { path } => write!(f, "unchanged {}", path.display()),
        }
    }
}

/// Outcome of a sync run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// Whether the actions were only planned
    pub dry_run: bool,
    /// Actions in the order they were decided
    pub actions: Vec<SyncAction>,
}

impl SyncReport {
    fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            actions: Vec::new(),
        }
    }

    pub fn copied(&self) -> usize {
        self.count(|a| matches!(a, SyncAction::Copy { .. }))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|a| matches!(a, SyncAction::Unchanged { .. }))
    }

    pub fn dirs_created(&self) -> usize {
        self.count(|a| matches!(a, SyncAction::CreateDir { .. }))
    }

    /// True when the run wrote (or would write) nothing.
    pub fn is_noop(&self) -> bool {
        self.copied() == 0 && self.dirs_created() == 0
    }

    fn count(&self, pred: impl Fn(&SyncAction) -> bool) -> usize {
        self.actions.iter().filter(|a| pred(a)).count()
    }
}

/// Engine for one-way, whole-file directory synchronization
#[derive(Debug, Clone, Default)]
pub struct SyncEngine {
    markers: RootMarkers,
    options: SyncOptions,
}

impl SyncEngine {
    pub fn new(options: SyncOptions) -> Self {
        Self {
            markers: RootMarkers::default(),
            options,
        }
    }

    /// Replace the root allow-list used by the pre-sync check.
    pub fn with_markers(mut self, markers: RootMarkers) -> Self {
        self.markers = markers;
        self
    }

    /// Sync every file `discovery` finds under `source_root` into `target_root`.
    ///
    /// Stops at the first error. Files copied before the error stay on disk.
    pub fn sync(
        &self,
        source_root: &Path,
        target_root: &Path,
        discovery: &dyn FileDiscovery,
    ) -> Result<SyncReport> {
        validate_roots(source_root, target_root, &self.markers)?;

        let entries = discovery.discover(source_root)?;
        tracing::info!(
            strategy = discovery.name(),
            entries = entries.len(),
            source = %source_root.display(),
            target = %target_root.display(),
            "Discovered files to sync"
        );

        let mut report = SyncReport::new(self.options.dry_run);
        let mut planned_dirs = HashSet::new();
        for entry in &entries {
            self.sync_entry(source_root, target_root, entry, &mut planned_dirs, &mut report)?;
        }
        Ok(report)
    }

    fn sync_entry(
        &self,
        source_root: &Path,
        target_root: &Path,
        entry: &DiscoveredEntry,
        planned_dirs: &mut HashSet<PathBuf>,
        report: &mut SyncReport,
    ) -> Result<()> {
        let src_file = source_root.join(&entry.path);
        if entry.kind == ChangeKind::Deleted {
            return Err(Error::DeletedUnsupported { path: src_file });
        }

        let target_file = target_root.join(&entry.path);
        if let Some(target_dir) = target_file.parent()
            && !target_dir.is_dir()
            && !planned_dirs.contains(target_dir)
        {
            tracing::debug!(dir = %target_dir.display(), dry_run = self.options.dry_run, "Creating directory");
            if self.options.dry_run {
                // create_dir_all makes every missing ancestor too
                planned_dirs.extend(target_dir.ancestors().map(Path::to_path_buf));
            } else {
                fs::create_dir_all(target_dir).map_err(|e| fork_fs::Error::io(target_dir, e))?;
            }
            report.actions.push(SyncAction::CreateDir {
                path: target_dir.to_path_buf(),
            });
        }

        if target_file.is_file() && fork_fs::files_identical(&src_file, &target_file)? {
            tracing::debug!(file = %src_file.display(), "File didn't change");
            report.actions.push(SyncAction::Unchanged { path: entry.path.clone() });
            return Ok(());
        }

        if self.options.dry_run {
            tracing::info!("[dry-run] Copying {} -> {}", src_file.display(), target_file.display());
        } else {
            tracing::info!("Copying {} -> {}", src_file.display(), target_file.display());
            fork_fs::copy_preserving_metadata(&src_file, &target_file)?;
        }
        report.actions.push(SyncAction::Copy {
            from: src_file,
            to: target_file,
        });
        Ok(())
    }
}

/// Sync `source_root` into `target_root` with the default root markers.
pub fn sync_dirs(
    source_root: &Path,
    target_root: &Path,
    discovery: &dyn FileDiscovery,
    dry_run: bool,
) -> Result<SyncReport> {
    SyncEngine::new(SyncOptions { dry_run }).sync(source_root, target_root, discovery)
}
