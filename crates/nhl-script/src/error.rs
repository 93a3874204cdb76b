use nhl_core::LayerError;
use thiserror::Error;

/// Errors raised while compiling script commands into the item layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("invalid context command format: {0}")]
    InvalidContext(String),

    #[error("invalid item command format: {0}")]
    InvalidItem(String),

    #[error("invalid variant or item format: {0}")]
    InvalidVariantOrItem(String),

    #[error("invalid variant id format: {0}")]
    InvalidVariantId(String),

    #[error(transparent)]
    Layer(#[from] LayerError),
}

/// Errors raised while reading a stack-size table.
#[derive(Debug, Error)]
pub enum StackTableError {
    #[error("malformed stack size entry on line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("failed to read stack size table: {0}")]
    Io(#[from] std::io::Error),
}
