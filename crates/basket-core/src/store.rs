//! In-memory list store
//!
//! The `ListStore` owns the ordered item sequence for one session and is
//! the only way items are created, toggled, or removed. It enforces the
//! list invariants:
//!
//! - no two items share a case-insensitive (name, unit) pair
//! - every stored quantity is a positive finite number
//! - ids are unique for the life of the session
//!
//! Every mutation is a single in-memory update or a no-op, so a failed
//! call always leaves the store in its prior valid state.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = ListStore::new();
//! let item = store.add_item("Milk", "2", "l")?;
//! store.toggle_purchased(item.id);
//! assert_eq!(store.unpurchased_count(), 0);
//! ```

use tracing::debug;
use uuid::Uuid;

use crate::error::{ValidationError, ValidationResult};
use crate::models::Item;

/// Session-scoped owner of the shopping list
#[derive(Debug, Default)]
pub struct ListStore {
    /// Items in insertion order
    items: Vec<Item>,
}

impl ListStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Mutations ====================

    /// Add a new item from raw text input
    ///
    /// Validation order, short-circuiting on the first failure:
    /// 1. all three fields must be non-empty after trimming
    /// 2. quantity must parse to a positive finite number
    /// 3. no existing item may match (name, unit) case-insensitively
    ///
    /// On success the item is appended to the end of the list and a clone
    /// is returned for display.
    pub fn add_item(&mut self, name: &str, quantity: &str, unit: &str) -> ValidationResult<Item> {
        let name = name.trim();
        let quantity = quantity.trim();
        let unit = unit.trim();

        if name.is_empty() || quantity.is_empty() || unit.is_empty() {
            return Err(ValidationError::MissingField);
        }

        let quantity: f64 = quantity
            .parse()
            .map_err(|_| ValidationError::InvalidQuantity)?;
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(ValidationError::InvalidQuantity);
        }

        if self.items.iter().any(|item| item.matches(name, unit)) {
            return Err(ValidationError::DuplicateItem);
        }

        let item = Item::new(name, quantity, unit);
        debug!(id = %item.id, name, "added item");
        self.items.push(item.clone());
        Ok(item)
    }

    /// Flip the purchased flag on the item with the given id
    ///
    /// A missing id is a silent no-op. Position and identity of all items
    /// are unchanged.
    pub fn toggle_purchased(&mut self, id: Uuid) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.toggle_purchased();
            debug!(%id, purchased = item.purchased, "toggled item");
        }
    }

    /// Remove the item with the given id
    ///
    /// A missing id is a silent no-op. Relative order of the remaining
    /// items is preserved.
    pub fn remove_item(&mut self, id: Uuid) {
        if let Some(pos) = self.items.iter().position(|item| item.id == id) {
            self.items.remove(pos);
            debug!(%id, "removed item");
        }
    }

    // ==================== Queries ====================

    /// Count of items not yet purchased
    ///
    /// Derived from current state on every call; never stored separately.
    pub fn unpurchased_count(&self) -> usize {
        self.items.iter().filter(|item| !item.purchased).count()
    }

    /// All items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Get an item by id
    pub fn get_item(&self, id: Uuid) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items whose id starts with the given prefix
    pub fn find_by_prefix(&self, prefix: &str) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.id.to_string().starts_with(prefix))
            .collect()
    }

    /// Total number of items
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
