use nhl_core::{EncodedCell, ItemLayer};

use crate::error::PersistError;
use crate::format::*;

/// Decode a `.nhl` buffer into cells: one little-endian u64 per 8 bytes, in
/// buffer order.
pub fn decode(bytes: &[u8]) -> Result<Vec<EncodedCell>, PersistError> {
    validate_size(bytes)?;

    let cells = bytes
        .chunks_exact(CELL_BYTES)
        .map(|record| u64::from_le(bytemuck::pod_read_unaligned(record)))
        .collect();
    Ok(cells)
}

/// Load an item layer from raw `.nhl` bytes.
pub fn load(bytes: &[u8]) -> Result<ItemLayer, PersistError> {
    let cells = decode(bytes)?;
    let layer = ItemLayer::from_cells(cells)?;
    log::debug!("Decoded layer with {} placed items", layer.placed_count());
    Ok(layer)
}
