//! Shopping Item Entity
//!
//! The single persisted entity: one row of the shopping list.

use serde::{Deserialize, Serialize};

/// One entry on the shopping list.
///
/// `id` is assigned by the store on insert and never reused, even after
/// deletes. `date` is free-form text kept verbatim; the store attaches no
/// calendar meaning to it. `name` is never validated and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    /// Unique identifier, assigned by the store
    pub id: i64,
    /// Item name
    pub name: String,
    /// Optional free-form date text
    pub date: Option<String>,
    /// How many to buy
    pub quantity: i32,
}

impl ShoppingItem {
    /// Build an item row the way the store returns it.
    pub fn new(id: i64, name: String, date: Option<String>, quantity: i32) -> Self {
        Self {
            id,
            name,
            date,
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = ShoppingItem::new(1, "Milk".to_string(), None, 2);
        assert_eq!(item.id, 1);
        assert_eq!(item.name, "Milk");
        assert_eq!(item.date, None);
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn test_rows_differing_only_in_id_are_distinct() {
        // Delete matches the whole row, so the id is part of an item's
        // identity alongside its visible fields.
        let a = ShoppingItem::new(1, "Milk".to_string(), Some("2024-01-01".to_string()), 1);
        let b = ShoppingItem::new(2, "Milk".to_string(), Some("2024-01-01".to_string()), 1);
        assert_ne!(a, b);
    }
}
