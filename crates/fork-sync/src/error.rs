//! Error types for fork-sync

use std::path::PathBuf;

/// Result type for fork-sync operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a sync run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] fork_fs::Error),

    #[error(transparent)]
    Git(#[from] fork_git::Error),

    #[error("Failed to walk {path}: {message}")]
    Walk { path: PathBuf, message: String },

    #[error("Source and target directories shall not be the same: {path}")]
    IdenticalRoots { path: PathBuf },

    #[error(
        "Neither {source_root} nor {target_root} looks like a chromium or chromium-modifications source root"
    )]
    InvalidRootShape {
        source_root: PathBuf,
        target_root: PathBuf,
    },

    #[error("Untracked file found while untracked files are not allowed: \"{path}\"")]
    UntrackedFileFound { path: PathBuf },

    #[error("Unsupported status code '{code}' for {path}")]
    UnsupportedStatus { code: String, path: PathBuf },

    #[error("Syncing deleted entries is not implemented: {path}")]
    DeletedUnsupported { path: PathBuf },

    #[error("Invalid untracked files mode '{value}'. Expected one of: not_allowed, allowed, ignored")]
    InvalidUntrackedMode { value: String },
}
