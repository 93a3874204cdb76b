use glam::UVec2;

/// One packed 64-bit item layer record.
///
/// Bit layout:
///   [0:15]   id (item id or sentinel)
///   [16:31]  flag0 (per-context flags; [16:20] doubles as variant indicator)
///   [32:36]  stack size - 1, or pushed variant code
///   [37:..]  texture code
///
/// Extension cells reuse the upper half:
///   [32:47]  base item id of the footprint anchor
///   [48:55]  dx from the anchor
///   [56:63]  dy from the anchor
pub type EncodedCell = u64;

/// Cell coordinate in layer-space. x grows across columns, y down rows.
pub type LayerCoord = UVec2;
