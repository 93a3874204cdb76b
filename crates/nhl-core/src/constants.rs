//! Single source of truth for layer geometry and cell bit layout.
//! The binary `.nhl` format and the script compiler both read these.

/// Side length of an acre in layer units.
pub const ACRE_WIDTH: u32 = 32;
pub const ACRE_HEIGHT: u32 = 32;

/// Acres along each axis of the map.
pub const ACRE_COUNT_X: u32 = 7;
pub const ACRE_COUNT_Y: u32 = 6;

/// Layer width in cells (224).
pub const LAYER_WIDTH: u32 = ACRE_WIDTH * ACRE_COUNT_X;

/// Layer height in cells (192).
pub const LAYER_HEIGHT: u32 = ACRE_HEIGHT * ACRE_COUNT_Y;

/// Total cells in one layer (43008).
pub const LAYER_TOTAL: usize = (LAYER_WIDTH * LAYER_HEIGHT) as usize;

/// Bytes per encoded cell.
pub const ITEM_SIZE: usize = 8;

/// Exact byte length of a serialized layer (344064).
pub const LAYER_SIZE: usize = LAYER_TOTAL * ITEM_SIZE;

/// Sentinel id: the cell is occupied by another cell's footprint.
pub const ITEM_EXTENSION: u16 = 0xFFFD;

/// Sentinel id: nothing is placed here.
pub const ITEM_EMPTY: u16 = 0xFFFE;

/// Sentinel id: the cell holds a DIY recipe; the recipe's item id sits in bits [32,48).
pub const ITEM_DIY_RECIPE: u16 = 0x16A1;

/// An `EMPTY` cell with every other field zeroed.
pub const EMPTY_CELL: u64 = ITEM_EMPTY as u64;

/// Bit offset of the per-context flag field.
pub const FLAG0_SHIFT: u32 = 16;

/// Bit offset of the stack-size / variant field.
pub const STACK_SHIFT: u32 = 32;

/// Bit offset of the texture field.
pub const TEXTURE_SHIFT: u32 = 37;

/// Bit offsets of the extension cell offsets.
pub const EXTENSION_DX_SHIFT: u32 = 48;
pub const EXTENSION_DY_SHIFT: u32 = 56;

/// Mask of the `id` field.
pub const ID_MASK: u64 = 0xFFFF;

/// Low 5 bits of `flag0`: the variant-presence indicator.
pub const VARIANT_FLAG_MASK: u64 = 0x1F_0000;

/// Increment applied to the variant indicator between repeated placements.
pub const VARIANT_INCREMENT: u64 = 0x1_0000;

/// Default footprint of a placed item, in cells.
pub const FOOTPRINT_WIDTH: u32 = 2;
pub const FOOTPRINT_HEIGHT: u32 = 2;

/// Placement anchors must sit on this grid.
pub const PLACEMENT_GRID: u32 = 2;
