//! Error types for cmdkit-meta

use std::path::PathBuf;

/// Result type for cmdkit-meta operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cmdkit-meta operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A source document declares a category outside the known set.
    /// This is a corpus defect caught at build time, not a runtime
    /// condition.
    #[error("Unknown category '{category}' in {file}")]
    UnknownCategory { file: String, category: String },

    #[error("Variant '{name}' not found under {root}")]
    VariantNotFound { name: String, root: PathBuf },

    #[error("Failed to parse metadata sidecar at {path}: {source}")]
    SidecarParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Fs(#[from] cmdkit_fs::Error),
}
