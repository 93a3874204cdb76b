pub mod cell;
pub mod constants;
pub mod error;
pub mod layer;
pub mod stack_size;
pub mod types;

pub use error::LayerError;
pub use layer::ItemLayer;
pub use stack_size::StackSizeTable;
pub use types::{EncodedCell, LayerCoord};
