//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use fork_git::StatusBackend;
use fork_sync::UntrackedFilesMode;
use tracing::Level;

/// forksync - Keep chromium modifications and a chromium checkout in sync
#[derive(Parser, Debug)]
#[command(name = "forksync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Shorthand for --log-level debug
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Turn off logging
    #[arg(long, global = true)]
    pub silent: bool,

    /// Config file (defaults to ./forksync.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Level for the tracing subscriber, or `None` when logging is off.
    pub fn max_level(&self) -> Option<Level> {
        if self.silent {
            None
        } else if self.verbose {
            Some(Level::DEBUG)
        } else {
            Some(self.log_level.into())
        }
    }
}

/// The two trees being synchronized
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct TreeArgs {
    /// Path to the chromium/src directory
    #[arg(long)]
    pub chromium_src_dir: PathBuf,

    /// Path to the curated modifications tree
    #[arg(long, default_value = "chromium-modifications/src")]
    pub modifications_dir: PathBuf,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Copy the modifications tree into chromium/src
    ///
    /// Every file of the modifications tree is considered. Files whose
    /// content did not change are left alone, and copies keep their
    /// timestamps and permissions. Afterwards the prebuilt release assets
    /// are installed.
    ToChromium {
        #[command(flatten)]
        trees: TreeArgs,

        /// Print filesystem operations without executing them
        #[arg(long)]
        dry_run: bool,

        /// Replace release assets that are already unpacked
        #[arg(long)]
        override_seglib: bool,

        /// Only sync files, do not install release assets
        #[arg(long)]
        skip_assets: bool,
    },

    /// Copy files changed in chromium/src back into the modifications tree
    ///
    /// Candidates come from `git status` of the chromium checkout.
    FromChromium {
        #[command(flatten)]
        trees: TreeArgs,

        /// Print filesystem operations without executing them
        #[arg(long)]
        dry_run: bool,

        /// What to do with untracked files: not_allowed, allowed or ignored
        #[arg(long, default_value_t = UntrackedFilesMode::NotAllowed)]
        untracked_files: UntrackedFilesMode,

        /// How to query git status: git-cli or libgit2 (overrides the config file)
        #[arg(long)]
        status_backend: Option<StatusBackend>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}
