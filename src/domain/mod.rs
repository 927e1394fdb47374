//! Domain Layer
//!
//! The shopping-list entities. This layer has no dependencies beyond serde
//! for serialization.

mod item;

pub use item::ShoppingItem;
