use glam::UVec2;
use nhl_core::constants::PLACEMENT_GRID;
use nhl_core::LayerCoord;

/// Placements per row when a context command leaves `width` out.
pub const DEFAULT_WIDTH: u32 = 16;

/// Interpretation switches set by the settings list of a context command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContextModes {
    /// Turn every placed item into a DIY recipe for that item.
    pub diy: bool,
    /// Read item ids as hexadecimal.
    pub hex: bool,
    /// Derive a repeat variant when the same item is placed again.
    pub variants: bool,
    /// Raw byte mode. Parsed and carried, no placement rule reads it.
    pub fossil: bool,
}

impl ContextModes {
    /// Build modes from setting names. Unknown names are skipped.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut modes = Self::default();
        for name in names {
            match name {
                "diy" => modes.diy = true,
                "hex" => modes.hex = true,
                "variants" => modes.variants = true,
                "fossil" => modes.fossil = true,
                "" => {}
                other => log::debug!("Ignoring unknown context setting '{}'", other),
            }
        }
        modes
    }
}

/// Cursor and flags that item commands are compiled against.
///
/// Placements fill a raster of `width` items per row starting at `anchor`,
/// two cells apart on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementContext {
    pub anchor: UVec2,
    /// Placements per row, at least 1.
    pub width: u32,
    /// Row count hint. Placement never reads it.
    pub height: u32,
    /// Placements made so far.
    pub offset: u32,
    /// Copied into bits [16:31] of every placed cell.
    pub flag0: u16,
    pub modes: ContextModes,
}

impl Default for PlacementContext {
    fn default() -> Self {
        Self {
            anchor: UVec2::ZERO,
            width: DEFAULT_WIDTH,
            height: 0,
            offset: 0,
            flag0: 0,
            modes: ContextModes::default(),
        }
    }
}

impl PlacementContext {
    /// Context anchored at (x, y) with every other field at its default.
    pub fn at(x: u32, y: u32) -> Self {
        Self {
            anchor: UVec2::new(x, y),
            ..Self::default()
        }
    }

    /// Set the row width, clamped to at least one placement.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width.max(1);
        self
    }

    /// Move to the next raster slot. Unbounded; the layer rejects
    /// coordinates that run off the grid.
    pub fn advance(&mut self) {
        self.offset = self.offset.saturating_add(1);
    }

    /// Layer coordinate of the current raster slot.
    pub fn cursor(&self) -> LayerCoord {
        let width = self.width.max(1);
        let column = self.offset % width;
        let row = self.offset / width;
        UVec2::new(
            self.anchor
                .x
                .saturating_add(column.saturating_mul(PLACEMENT_GRID)),
            self.anchor.y.saturating_add(row.saturating_mul(PLACEMENT_GRID)),
        )
    }
}
