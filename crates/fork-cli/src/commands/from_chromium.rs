//! `forksync from-chromium`

use std::path::{Path, PathBuf};

use colored::Colorize;
use fork_git::StatusBackend;
use fork_sync::{StatusDiscovery, SyncEngine, SyncOptions, UntrackedFilesMode};

use super::{print_summary, resolve};
use crate::config::Settings;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct FromChromiumArgs {
    pub chromium_src_dir: PathBuf,
    pub modifications_dir: PathBuf,
    pub dry_run: bool,
    pub untracked_files: UntrackedFilesMode,
    /// Overrides `[status] backend` when set
    pub status_backend: Option<StatusBackend>,
}

/// Pull the files changed in the chromium checkout back into the
/// modifications tree.
pub fn run_from_chromium(cwd: &Path, settings: &Settings, args: &FromChromiumArgs) -> Result<()> {
    let chromium = resolve(cwd, &args.chromium_src_dir)?;
    let modifications = resolve(cwd, &args.modifications_dir)?;

    let backend = args.status_backend.unwrap_or(settings.status.backend);
    tracing::debug!(%backend, untracked = %args.untracked_files, "Using status discovery");

    println!(
        "{} Syncing changes {} -> {}",
        "=>".blue().bold(),
        chromium.display(),
        modifications.display()
    );

    let discovery = StatusDiscovery::new(
        backend.provider(&settings.status.git),
        args.untracked_files,
    );
    let engine = SyncEngine::new(SyncOptions {
        dry_run: args.dry_run,
    })
    .with_markers(settings.roots.clone());
    let report = engine.sync(&chromium, &modifications, &discovery)?;
    print_summary(&report);
    Ok(())
}
