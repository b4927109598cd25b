//! Error types for cmdkit-fs

use std::path::PathBuf;

/// Result type for cmdkit-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cmdkit-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No destination directory: pass an explicit path or a scope")]
    MissingDestination,

    #[error("Could not resolve the home directory for user scope")]
    NoHomeDirectory,

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
