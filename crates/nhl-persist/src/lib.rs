pub mod error;
pub mod format;
pub mod load;
pub mod save;

pub use error::PersistError;
pub use load::{decode, load};
pub use save::{encode, save};
