//! Error types for dsc-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from dsc-section
    #[error(transparent)]
    Section(#[from] dsc_section::Error),

    /// Error from dsc-fs
    #[error(transparent)]
    Fs(#[from] dsc_fs::Error),

    /// JSON report serialization error
    #[error("Failed to render JSON report: {0}")]
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
