//! Shopping Screen
//!
//! Transient state behind the single list screen: the latest item
//! snapshot plus the in-progress draft (name, optional date, quantity).
//! Mutations are dispatched to the store without waiting for the
//! outcome; the screen learns the result through the subscription feed
//! like any other observer.

use tracing::warn;

use crate::domain::ShoppingItem;
use crate::store::ItemStore;

/// Quantities below this never leave the screen.
const MIN_QUANTITY: i32 = 1;

pub struct ShoppingScreen {
    store: ItemStore,
    items: Vec<ShoppingItem>,
    name_input: String,
    selected_date: Option<String>,
    quantity: i32,
}

impl ShoppingScreen {
    pub fn new(store: ItemStore) -> Self {
        Self {
            store,
            items: Vec::new(),
            name_input: String::new(),
            selected_date: None,
            quantity: MIN_QUANTITY,
        }
    }

    /// Replace the displayed set with a fresh snapshot from the feed.
    pub fn apply_snapshot(&mut self, items: Vec<ShoppingItem>) {
        self.items = items;
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn name_input(&self) -> &str {
        &self.name_input
    }

    pub fn selected_date(&self) -> Option<&str> {
        self.selected_date.as_deref()
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn set_name_input(&mut self, name: String) {
        self.name_input = name;
    }

    pub fn set_date(&mut self, date: String) {
        self.selected_date = Some(date);
    }

    pub fn clear_date(&mut self) {
        self.selected_date = None;
    }

    pub fn increment_quantity(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Step the draft quantity down, never below one.
    pub fn decrement_quantity(&mut self) {
        if self.quantity > MIN_QUANTITY {
            self.quantity -= 1;
        }
    }

    /// Dispatch the draft as an insert and reset the name and quantity.
    ///
    /// The selected date carries over to the next draft. The name goes
    /// out exactly as typed, empty included. The insert runs in the
    /// background; a failure is logged, never surfaced here.
    pub fn submit(&mut self) {
        let name = std::mem::take(&mut self.name_input);
        let date = self.selected_date.clone();
        let quantity = self.quantity;
        self.quantity = MIN_QUANTITY;

        let store = self.store.clone();
        tokio::spawn(async move {
            if let Err(e) = store.insert(name, date, quantity).await {
                warn!("failed to add item: {e}");
            }
        });
    }

    /// Dispatch a delete for `item` in the background.
    pub fn remove(&self, item: ShoppingItem) {
        let store = self.store.clone();
        tokio::spawn(async move {
            if let Err(e) = store.delete(item).await {
                warn!("failed to remove item: {e}");
            }
        });
    }
}
