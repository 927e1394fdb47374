//! Store Layer
//!
//! SQLite-backed persistence for the shopping list. The store owns the
//! only database connection, serializes writes behind it, and feeds
//! subscribers a fresh snapshot after every effective mutation.

mod db;
mod error;
mod item_store;
mod subscription;


pub use error::{StoreError, StoreResult};
pub use item_store::ItemStore;
pub use subscription::ItemSubscription;
