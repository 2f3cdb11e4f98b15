//! Installing release assets into a chromium checkout

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::{AssetBundle, AssetPlan, Error, ReleaseFetcher, Result, unpack_tar_gz};

/// What happened to one bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleOutcome {
    /// Destination already present and not overridden
    Skipped(PathBuf),
    /// Downloaded and unpacked into the destination
    Installed(PathBuf),
    /// Dry-run: would have been downloaded and unpacked
    Planned(PathBuf),
}

/// Install one bundle under `chromium_src`, downloading into `work_dir`.
///
/// An existing destination is kept unless `override_existing` is set, in
/// which case it is removed first. Under `dry_run` nothing is removed,
/// downloaded or unpacked.
pub fn setup_bundle(
    fetcher: &dyn ReleaseFetcher,
    work_dir: &Path,
    chromium_src: &Path,
    bundle: &AssetBundle,
    override_existing: bool,
    dry_run: bool,
) -> Result<BundleOutcome> {
    let unpacked_dir = chromium_src.join(&bundle.target);

    if unpacked_dir.is_dir() {
        if !override_existing {
            tracing::debug!(dir = %unpacked_dir.display(), "Asset already exists - ignoring");
            return Ok(BundleOutcome::Skipped(unpacked_dir));
        }
        tracing::info!(dir = %unpacked_dir.display(), dry_run, "Removing existing asset directory");
        if !dry_run {
            fs::remove_dir_all(&unpacked_dir).map_err(|e| Error::io(&unpacked_dir, e))?;
        }
    }

    if dry_run {
        tracing::info!(
            "[dry-run] Fetching {}/{} into {}",
            bundle.tag,
            bundle.asset,
            unpacked_dir.display()
        );
        return Ok(BundleOutcome::Planned(unpacked_dir));
    }

    let archive = fetcher.fetch(work_dir, bundle)?;
    unpack_tar_gz(&archive, &unpacked_dir, true)?;
    tracing::info!(asset = %bundle.asset, dir = %unpacked_dir.display(), "Installed asset");
    Ok(BundleOutcome::Installed(unpacked_dir))
}

/// Install every bundle of `plan`, downloading into a temporary directory
/// that is removed afterwards.
pub fn setup_plan(
    fetcher: &dyn ReleaseFetcher,
    chromium_src: &Path,
    plan: &AssetPlan,
    override_existing: bool,
    dry_run: bool,
) -> Result<Vec<BundleOutcome>> {
    let work_dir = TempDir::new().map_err(|e| Error::io(std::env::temp_dir(), e))?;
    plan.bundles
        .iter()
        .map(|bundle| {
            setup_bundle(
                fetcher,
                work_dir.path(),
                chromium_src,
                bundle,
                override_existing,
                dry_run,
            )
        })
        .collect()
}
