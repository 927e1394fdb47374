//! Shopnotes
//!
//! Single-screen shopping list over a local SQLite store.
//!
//! Layered architecture:
//! - domain: Core entities
//! - store: SQLite persistence and the live snapshot feed
//! - screen: Transient draft state and fire-and-forget dispatch
//! - shell: Line-oriented terminal front end
//! - config: Environment-driven settings

pub mod config;
pub mod domain;
pub mod screen;
pub mod shell;
pub mod store;

pub use config::Config;
pub use domain::ShoppingItem;
pub use screen::ShoppingScreen;
pub use store::{ItemStore, ItemSubscription, StoreError, StoreResult};
