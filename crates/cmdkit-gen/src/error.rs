//! Error types for cmdkit-gen

/// Result type for cmdkit-gen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during generation or conflict checking
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] cmdkit_fs::Error),

    #[error(transparent)]
    Meta(#[from] cmdkit_meta::Error),

    #[error(transparent)]
    Content(#[from] cmdkit_content::Error),
}
