//! `forksync to-chromium`

use std::path::{Path, PathBuf};

use colored::Colorize;
use fork_assets::{BundleOutcome, GhRelease, copy_files_from_subfolder, setup_plan};
use fork_sync::{RecursiveDiscovery, SyncEngine, SyncOptions};

use super::{print_summary, resolve};
use crate::config::Settings;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct ToChromiumArgs {
    pub chromium_src_dir: PathBuf,
    pub modifications_dir: PathBuf,
    pub dry_run: bool,
    pub override_seglib: bool,
    pub skip_assets: bool,
}

/// Push the whole modifications tree into chromium/src, then install the
/// release assets the build needs.
pub fn run_to_chromium(cwd: &Path, settings: &Settings, args: &ToChromiumArgs) -> Result<()> {
    let modifications = resolve(cwd, &args.modifications_dir)?;
    let chromium = resolve(cwd, &args.chromium_src_dir)?;

    println!(
        "{} Syncing {} -> {}",
        "=>".blue().bold(),
        modifications.display(),
        chromium.display()
    );

    let engine = SyncEngine::new(SyncOptions {
        dry_run: args.dry_run,
    })
    .with_markers(settings.roots.clone());
    let report = engine.sync(&modifications, &chromium, &RecursiveDiscovery::new())?;
    print_summary(&report);

    if args.skip_assets {
        tracing::debug!("Skipping release assets");
        return Ok(());
    }

    install_assets(settings, &modifications, &chromium, args)
}

fn install_assets(
    settings: &Settings,
    modifications: &Path,
    chromium: &Path,
    args: &ToChromiumArgs,
) -> Result<()> {
    let plan = settings.assets.plan()?;
    let fetcher = GhRelease::new(settings.assets.gh.clone(), settings.assets.repo.clone());

    println!("{} Setting up release assets", "=>".blue().bold());
    let outcomes = setup_plan(&fetcher, chromium, &plan, args.override_seglib, args.dry_run)?;
    for outcome in &outcomes {
        match outcome {
            BundleOutcome::Skipped(dir) => {
                println!("   {} {} (already present)", "-".dimmed(), dir.display())
            }
            BundleOutcome::Installed(dir) => println!("   {} {}", "+".green(), dir.display()),
            BundleOutcome::Planned(dir) => println!("   {} {}", "+".yellow(), dir.display()),
        }
    }

    let aux = settings.assets.aux_plan();
    if aux.is_empty() {
        return Ok(());
    }

    // Aux sources live next to the modifications checkout: <repo>/chromium-modifications/src
    let repo_root = modifications
        .parent()
        .and_then(Path::parent)
        .unwrap_or(modifications);
    for copy in &aux {
        let from = repo_root.join(&copy.from);
        let to = chromium.join(&copy.to);
        if args.dry_run {
            tracing::info!("[dry-run] Copying {} -> {}", from.display(), to.display());
            continue;
        }
        let count = copy_files_from_subfolder(&from, &to, copy.file.as_deref())?;
        println!("   {} {} ({} file(s))", "+".green(), to.display(), count);
    }
    Ok(())
}
