use nhl_core::{EncodedCell, ItemLayer};

/// Encode cells as consecutive little-endian u64 records, in order.
pub fn encode(cells: &[EncodedCell]) -> Vec<u8> {
    let records: Vec<u64> = cells.iter().map(|cell| cell.to_le()).collect();
    bytemuck::cast_slice(&records).to_vec()
}

/// Serialize an item layer into the `.nhl` binary format.
///
/// Layout: 43008 cells x 8 bytes, `index = x * 192 + y`, no header.
pub fn save(layer: &ItemLayer) -> Vec<u8> {
    encode(layer.cells())
}
