use thiserror::Error;

/// Errors raised when reading or writing cells of an item layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayerError {
    #[error("coordinate ({x}, {y}) is outside the item layer")]
    OutOfBounds { x: u32, y: u32 },

    #[error("cannot anchor an item at ({x}, {y}): coordinates must be even")]
    UnalignedCoordinate { x: u32, y: u32 },

    #[error("layer needs {expected} cells, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },
}
