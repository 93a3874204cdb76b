use nhl_core::LayerError;

/// Errors that can occur while decoding a layer file.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("incorrect layer file size: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    Layer(#[from] LayerError),
}
