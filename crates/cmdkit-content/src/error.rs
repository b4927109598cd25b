//! Error types for cmdkit-content

use std::path::PathBuf;

/// Result type for cmdkit-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cmdkit-content operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown transform type: {0}")]
    UnknownTransform(String),

    #[error("missing required 'path' attribute on cmdkit:{transform} directive")]
    MissingPathAttribute { transform: String },

    #[error("Unterminated cmdkit:{transform} directive at byte {position}")]
    UnterminatedDirective { transform: String, position: usize },

    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read elsePath {path}: {source}")]
    ElseReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
