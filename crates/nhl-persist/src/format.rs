use nhl_core::constants::{ITEM_SIZE, LAYER_SIZE, LAYER_TOTAL};

use crate::error::PersistError;

/// Bytes per cell record in a `.nhl` file.
pub const CELL_BYTES: usize = ITEM_SIZE;

/// Cell records per `.nhl` file.
pub const CELL_COUNT: usize = LAYER_TOTAL;

/// Exact size of a `.nhl` file. There is no header or padding.
pub const FILE_SIZE: usize = LAYER_SIZE;

/// Reject any buffer that is not exactly one layer long.
pub fn validate_size(bytes: &[u8]) -> Result<(), PersistError> {
    if bytes.len() != FILE_SIZE {
        return Err(PersistError::SizeMismatch {
            expected: FILE_SIZE,
            actual: bytes.len(),
        });
    }
    Ok(())
}
