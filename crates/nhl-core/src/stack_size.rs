use std::collections::HashMap;

/// Default stack sizes keyed by base item id.
///
/// Ids without an entry stack to 1, which means "no override" when items
/// are placed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackSizeTable {
    sizes: HashMap<u16, u32>,
}

impl StackSizeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the default stack size for an item. Later entries win.
    pub fn insert(&mut self, item_id: u16, stack_size: u32) -> Option<u32> {
        self.sizes.insert(item_id, stack_size)
    }

    /// Look up the stack size for an item. Returns None if not listed.
    pub fn get(&self, item_id: u16) -> Option<u32> {
        self.sizes.get(&item_id).copied()
    }

    /// Extra stack (size - 1) to apply when placing `item_id`, if any.
    pub fn default_extra(&self, item_id: u16) -> Option<u32> {
        self.get(item_id)
            .filter(|&size| size > 1)
            .map(|size| size - 1)
    }

    /// Number of listed items.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl FromIterator<(u16, u32)> for StackSizeTable {
    fn from_iter<I: IntoIterator<Item = (u16, u32)>>(iter: I) -> Self {
        Self {
            sizes: iter.into_iter().collect(),
        }
    }
}
