//! Command implementations

mod from_chromium;
mod to_chromium;

pub use from_chromium::{FromChromiumArgs, run_from_chromium};
pub use to_chromium::{ToChromiumArgs, run_to_chromium};

use std::path::{Path, PathBuf};

use colored::Colorize;
use fork_sync::SyncReport;

use crate::error::Result;

/// Resolve a command-line path against the invocation directory.
fn resolve(cwd: &Path, path: &Path) -> Result<PathBuf> {
    Ok(fork_fs::resolve_absolute(&cwd.join(path))?)
}

fn print_summary(report: &SyncReport) {
    let (label, verb) = if report.dry_run {
        ("DRY RUN".yellow().bold(), "would copy")
    } else {
        ("OK".green().bold(), "copied")
    };

    if report.is_noop() {
        println!("{} Nothing to sync. {} file(s) unchanged.", label, report.unchanged());
        return;
    }

    if report.dry_run {
        for action in &report.actions {
            println!("   {} {}", "+".yellow(), action);
        }
    }

    println!(
        "{} {} {} file(s), {} unchanged, {} director{} created.",
        label,
        verb,
        report.copied(),
        report.unchanged(),
        report.dirs_created(),
        if report.dirs_created() == 1 { "y" } else { "ies" }
    );
}
