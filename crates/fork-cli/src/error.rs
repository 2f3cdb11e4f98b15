//! Error types for fork-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from the sync engine
    #[error(transparent)]
    Sync(#[from] fork_sync::Error),

    /// Error while installing release assets
    #[error(transparent)]
    Assets(#[from] fork_assets::Error),

    /// Error from fork-fs (config loading)
    #[error(transparent)]
    Fs(#[from] fork_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
