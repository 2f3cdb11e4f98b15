//! Error types for fork-assets

use std::path::PathBuf;

/// Result type for fork-assets operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while preparing release assets
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] fork_fs::Error),

    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with code {code}: {stderr}")]
    CommandFailed {
        program: String,
        code: i32,
        stderr: String,
    },

    #[error("Downloaded asset not found at {path}")]
    MissingDownload { path: PathBuf },

    #[error("Archive {path} is empty")]
    EmptyArchive { path: PathBuf },

    #[error("Archive {archive} contains an entry escaping the target: {entry}")]
    UnsafeArchiveEntry { archive: PathBuf, entry: PathBuf },

    #[error("Unsupported platform {os}")]
    UnsupportedPlatform { os: String },

    #[error("The subfolder {path} does not exist")]
    MissingSubfolder { path: PathBuf },

    #[error("File {path} does not exist")]
    MissingFile { path: PathBuf },

    #[error("No files were copied from {path}")]
    NothingCopied { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Fs(fork_fs::Error::io(path, source))
    }
}
