//! forksync CLI
//!
//! Moves files between the curated chromium-modifications tree and a full
//! chromium checkout.

mod cli;
mod commands;
mod config;
mod error;

use std::io;
use std::path::Path;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands, TreeArgs};
use commands::{FromChromiumArgs, ToChromiumArgs};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(level) = cli.max_level() {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(level >= tracing::Level::DEBUG)
            .with_writer(io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {}", e)))?;
    }

    match cli.command {
        Some(cmd) => execute_command(cmd, cli.config.as_deref()),
        None => {
            println!("{} chromium fork sync", "forksync".green().bold());
            println!();
            println!("Run {} for available commands.", "forksync --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, config_path: Option<&Path>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    match cmd {
        Commands::ToChromium {
            trees: TreeArgs {
                chromium_src_dir,
                modifications_dir,
            },
            dry_run,
            override_seglib,
            skip_assets,
        } => {
            let settings = config::load_settings(config_path, &cwd)?;
            let args = ToChromiumArgs {
                chromium_src_dir,
                modifications_dir,
                dry_run,
                override_seglib,
                skip_assets,
            };
            commands::run_to_chromium(&cwd, &settings, &args)
        }
        Commands::FromChromium {
            trees: TreeArgs {
                chromium_src_dir,
                modifications_dir,
            },
            dry_run,
            untracked_files,
            status_backend,
        } => {
            let settings = config::load_settings(config_path, &cwd)?;
            let args = FromChromiumArgs {
                chromium_src_dir,
                modifications_dir,
                dry_run,
                untracked_files,
                status_backend,
            };
            commands::run_from_chromium(&cwd, &settings, &args)
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "forksync", &mut io::stdout());
            Ok(())
        }
    }
}
