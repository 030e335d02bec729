//! Domain Layer
//!
//! Items and request bodies in the shape the items API speaks.

mod item;

pub use item::{CreatedItem, Item, ItemId, NewItem};
