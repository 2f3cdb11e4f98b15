//! Error types for fork-git

use std::path::PathBuf;

/// Result type for fork-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in fork-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Failed to run '{program}' in {workdir}: {source}")]
    Spawn {
        program: String,
        workdir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with code {code}: {stderr}")]
    CommandFailed {
        program: String,
        code: i32,
        stderr: String,
    },

    #[error("Malformed status line: '{line}'")]
    MalformedStatusLine { line: String },

    #[error("Status entry has a non UTF-8 path in {workdir}")]
    NonUtf8Path { workdir: PathBuf },

    #[error("{workdir} is not the top of a git working tree (the working tree starts at {root})")]
    NotWorktreeRoot { workdir: PathBuf, root: PathBuf },

    #[error("Unknown status backend: '{name}'. Expected one of: git-cli, libgit2")]
    UnknownBackend { name: String },
}
