//! Error types for proj-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from proj-core
    #[error(transparent)]
    Core(#[from] proj_core::Error),

    /// Error from proj-regions
    #[error(transparent)]
    Regions(#[from] proj_regions::Error),

    /// Error from proj-fs
    #[error(transparent)]
    Fs(#[from] proj_fs::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

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
