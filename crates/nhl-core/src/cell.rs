use crate::constants::*;
use crate::types::EncodedCell;

/// Item id or sentinel stored in bits [0:15].
pub fn item_id(cell: EncodedCell) -> u16 {
    (cell & ID_MASK) as u16
}

/// Per-context flag value stored in bits [16:31].
pub fn flag0(cell: EncodedCell) -> u16 {
    ((cell >> FLAG0_SHIFT) & 0xFFFF) as u16
}

/// Stack size minus one, or a pushed variant code, from bits [32:36].
pub fn stack_or_variant(cell: EncodedCell) -> u8 {
    ((cell >> STACK_SHIFT) & 0x1F) as u8
}

/// Texture code from bits [37:63].
pub fn texture(cell: EncodedCell) -> u32 {
    (cell >> TEXTURE_SHIFT) as u32
}

/// Whether the cell carries the variant indicator bits [16:20].
pub fn has_variant_flag(cell: EncodedCell) -> bool {
    cell & VARIANT_FLAG_MASK != 0
}

/// Whether the cell is a real placement (neither empty nor part of another footprint).
pub fn is_placed_item(cell: EncodedCell) -> bool {
    let id = item_id(cell);
    id != ITEM_EMPTY && id != ITEM_EXTENSION
}

/// Pack a plain item placement: id, context flag and (stack size - 1).
///
/// `id` is OR'd in whole, so bits above [0:15] of a wide hex id survive.
pub fn pack_item(id: u64, flag0: u16, stack: u32) -> EncodedCell {
    id | (flag0 as u64) << FLAG0_SHIFT | (stack as u64) << STACK_SHIFT
}

/// Variant/texture bits pushed by a `variant_texture` script token.
pub fn variant_bits(variant: u8, texture: u8) -> EncodedCell {
    (variant as u64) << STACK_SHIFT | (texture as u64) << TEXTURE_SHIFT
}

/// Cell stored at offset (dx, dy) from a footprint anchor holding `item`.
///
/// An empty anchor has no footprint: the empty value is copied as-is.
pub fn extension_cell(item: EncodedCell, dx: u8, dy: u8) -> EncodedCell {
    if item_id(item) == ITEM_EMPTY {
        return item;
    }
    (dy as u64) << EXTENSION_DY_SHIFT
        | (dx as u64) << EXTENSION_DX_SHIFT
        | (item & ID_MASK) << STACK_SHIFT
        | ITEM_EXTENSION as u64
}

/// DIY recipe cell teaching `item_id`.
pub fn diy_cell(item_id: u16) -> EncodedCell {
    (item_id as u64) << STACK_SHIFT | ITEM_DIY_RECIPE as u64
}
