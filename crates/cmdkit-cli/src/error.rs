//! Error types for cmdkit-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from cmdkit-fs
    #[error(transparent)]
    Fs(#[from] cmdkit_fs::Error),

    /// Error from cmdkit-content
    #[error(transparent)]
    Content(#[from] cmdkit_content::Error),

    /// Error from cmdkit-meta
    #[error(transparent)]
    Meta(#[from] cmdkit_meta::Error),

    /// Error from cmdkit-gen
    #[error(transparent)]
    Gen(#[from] cmdkit_gen::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Interactive prompt error
    #[error("Interactive prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },

    /// The user backed out of a prompt; exits cleanly with no writes
    #[error("Cancelled by user")]
    Cancelled,
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
