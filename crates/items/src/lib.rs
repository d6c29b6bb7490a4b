//! Item domain module.
//!
//! Volatile, process-local item records plus the store that owns them
//! (no persistence, no HTTP).

pub mod item;
pub mod store;

pub use item::{placeholder_items, Item, NewItem};
pub use store::ItemStore;
