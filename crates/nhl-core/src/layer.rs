use crate::cell::{extension_cell, is_placed_item, item_id};
use crate::constants::*;
use crate::error::LayerError;
use crate::types::EncodedCell;

/// The fixed 224x192 grid of encoded cells making up one item layer.
///
/// Cells are stored column-major: `index = x * LAYER_HEIGHT + y`, which is
/// also the order they appear in a `.nhl` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemLayer {
    cells: Vec<EncodedCell>,
}

impl Default for ItemLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemLayer {
    /// Create a layer with every cell empty.
    pub fn new() -> Self {
        Self {
            cells: vec![EMPTY_CELL; LAYER_TOTAL],
        }
    }

    /// Wrap a full set of cells in grid order.
    pub fn from_cells(cells: Vec<EncodedCell>) -> Result<Self, LayerError> {
        if cells.len() != LAYER_TOTAL {
            return Err(LayerError::CellCountMismatch {
                expected: LAYER_TOTAL,
                actual: cells.len(),
            });
        }
        Ok(Self { cells })
    }

    /// All cells in grid order.
    pub fn cells(&self) -> &[EncodedCell] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<EncodedCell> {
        self.cells
    }

    /// Check a coordinate against the layer extents.
    pub fn is_valid(&self, x: u32, y: u32) -> bool {
        x < LAYER_WIDTH && y < LAYER_HEIGHT
    }

    fn offset(&self, x: u32, y: u32) -> Result<usize, LayerError> {
        if !self.is_valid(x, y) {
            return Err(LayerError::OutOfBounds { x, y });
        }
        Ok((x * LAYER_HEIGHT + y) as usize)
    }

    /// Read the cell at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Result<EncodedCell, LayerError> {
        let offset = self.offset(x, y)?;
        Ok(self.cells[offset])
    }

    /// Place `item` with the default 2x2 footprint anchored at (x, y).
    pub fn set(&mut self, x: u32, y: u32, item: EncodedCell) -> Result<(), LayerError> {
        self.set_footprint(x, y, item, FOOTPRINT_WIDTH as u8, FOOTPRINT_HEIGHT as u8)
    }

    /// Place `item` at (x, y) and fill the rest of its `width` x `height`
    /// footprint with extension cells pointing back at the anchor.
    ///
    /// The anchor must sit on the 2-unit placement grid. The whole footprint
    /// is bounds-checked before any cell is written.
    pub fn set_footprint(
        &mut self,
        x: u32,
        y: u32,
        item: EncodedCell,
        width: u8,
        height: u8,
    ) -> Result<(), LayerError> {
        if x % PLACEMENT_GRID != 0 || y % PLACEMENT_GRID != 0 {
            return Err(LayerError::UnalignedCoordinate { x, y });
        }

        let mut writes = Vec::with_capacity(width as usize * height as usize);
        for dx in 0..width {
            for dy in 0..height {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let ex = x.saturating_add(dx as u32);
                let ey = y.saturating_add(dy as u32);
                writes.push((self.offset(ex, ey)?, extension_cell(item, dx, dy)));
            }
        }
        let anchor = self.offset(x, y)?;

        for (offset, cell) in writes {
            self.cells[offset] = cell;
        }
        self.cells[anchor] = item;
        Ok(())
    }

    /// Placed items in scan order (x outer, y inner), skipping empty and
    /// extension cells. Without `include_variants` only the id field is kept.
    pub fn items(&self, include_variants: bool) -> Vec<EncodedCell> {
        self.cells
            .iter()
            .copied()
            .filter(|&cell| is_placed_item(cell))
            .map(|cell| {
                if include_variants {
                    cell
                } else {
                    item_id(cell) as EncodedCell
                }
            })
            .collect()
    }

    /// Number of cells holding a real placement.
    pub fn placed_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| is_placed_item(cell)).count()
    }
}
