use nhl_core::cell::{diy_cell, has_variant_flag, item_id, pack_item, variant_bits};
use nhl_core::constants::{
    EMPTY_CELL, ID_MASK, STACK_SHIFT, VARIANT_FLAG_MASK, VARIANT_INCREMENT,
};
use nhl_core::{EncodedCell, ItemLayer, StackSizeTable};

use crate::context::PlacementContext;
use crate::error::ScriptError;
use crate::grammar::{parse_command, Command, ItemSpec, VariantToken};

/// Compiles script commands into cells of an owned item layer.
///
/// Tracks the active placement context, the last cell placed under it (for
/// repeat variants) and a variant pushed for the next placement.
pub struct Compiler {
    layer: ItemLayer,
    stack_sizes: StackSizeTable,
    context: PlacementContext,
    last_placed: Option<EncodedCell>,
    pending_variant: Option<EncodedCell>,
}

impl Compiler {
    pub fn new(layer: ItemLayer, stack_sizes: StackSizeTable) -> Self {
        Self {
            layer,
            stack_sizes,
            context: PlacementContext::default(),
            last_placed: None,
            pending_variant: None,
        }
    }

    pub fn layer(&self) -> &ItemLayer {
        &self.layer
    }

    pub fn into_layer(self) -> ItemLayer {
        self.layer
    }

    pub fn context(&self) -> &PlacementContext {
        &self.context
    }

    pub fn last_placed(&self) -> Option<EncodedCell> {
        self.last_placed
    }

    /// Return to the default context, forgetting the last placed cell.
    pub fn reset_context(&mut self) {
        self.set_context(PlacementContext::default());
    }

    /// Apply every command in order, stopping at the first error.
    pub fn apply_script<I, C, S>(&mut self, commands: I) -> Result<(), ScriptError>
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[S]>,
        S: AsRef<str>,
    {
        for command in commands {
            self.apply_command(command.as_ref())?;
        }
        Ok(())
    }

    /// Apply the tokens of a single script line.
    pub fn apply_command<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<(), ScriptError> {
        match parse_command(tokens)? {
            Command::Empty => Ok(()),
            Command::Context(context) => {
                self.set_context(context);
                Ok(())
            }
            Command::Item(item) => {
                let id = self.resolve_id(&item)?;
                self.place_item(id, &item)
            }
            Command::VariantItem { variant, item } => {
                // A variant is only pushed once its item is known to place
                let id = self.resolve_id(&item)?;
                self.push_variant(variant);
                self.place_item(id, &item)
            }
        }
    }

    fn set_context(&mut self, context: PlacementContext) {
        log::debug!(
            "Context at ({}, {}) width {} offset {} flag0 {:#x} {:?}",
            context.anchor.x,
            context.anchor.y,
            context.width,
            context.offset,
            context.flag0,
            context.modes
        );
        self.context = context;
        self.last_placed = None;
        self.pending_variant = None;
    }

    fn push_variant(&mut self, variant: VariantToken) {
        if let VariantToken::Variant { variant, texture } = variant {
            self.pending_variant = Some(variant_bits(variant, texture));
        }
    }

    fn resolve_id(&self, item: &ItemSpec<'_>) -> Result<u64, ScriptError> {
        item.item_id(self.context.modes.hex)
            .ok_or_else(|| ScriptError::InvalidItem(item.token.to_string()))
    }

    fn place_item(&mut self, id: u64, item: &ItemSpec<'_>) -> Result<(), ScriptError> {
        let modes = self.context.modes;
        let stack = item.stack.saturating_sub(1);
        let base = (id & ID_MASK) as u16;

        let mut cell = pack_item(id, self.context.flag0, stack);
        if let Some(variant) = self.pending_variant.take() {
            cell |= variant;
        }

        if modes.diy {
            cell = diy_cell(base);
        }

        if base == 0 {
            cell = EMPTY_CELL;
        } else if !has_variant_flag(cell) {
            if let Some(extra) = self.stack_sizes.default_extra(base) {
                cell |= (extra as u64) << STACK_SHIFT;
            }
        }

        for _ in 0..item.count {
            if let Some(last) = self.last_placed {
                if modes.variants && item_id(last) == base {
                    cell = repeat_cell(base, last);
                }
            }
            self.last_placed = Some(cell);

            let pos = self.context.cursor();
            self.layer.set(pos.x, pos.y, cell)?;
            log::trace!("Placed {:#018x} at ({}, {})", cell, pos.x, pos.y);
            self.context.advance();
        }
        Ok(())
    }
}

/// Cell placed when `base` repeats right after `last` in variants mode.
///
/// The mask is the sum `0x1F0000 + 0x10000 = 0x200000`, so only bit 21 of
/// the previous cell carries over and stack/flag bits are dropped.
// TODO: compare against layers built by the in-game editor; a per-repeat
// increment would be `(last & 0x1F0000) + 0x10000` instead.
fn repeat_cell(base: u16, last: EncodedCell) -> EncodedCell {
    base as EncodedCell | (last & (VARIANT_FLAG_MASK + VARIANT_INCREMENT))
}
