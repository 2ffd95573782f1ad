//! Data models for basket
//!
//! Defines the core data structure: a shopping list `Item`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One shopping list entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Unique identifier, stable for the item's lifetime
    pub id: Uuid,
    /// Display name (trimmed)
    pub name: String,
    /// How much to buy (always positive)
    pub quantity: f64,
    /// Unit of measure, e.g. "l" or "kg" (trimmed)
    pub unit: String,
    /// Whether the item has been bought
    pub purchased: bool,
    /// When this item was added to the list
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Create a new unpurchased item
    ///
    /// Inputs are assumed to be validated already; the store is the only
    /// caller in normal operation.
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            quantity,
            unit: unit.into(),
            purchased: false,
            created_at: Utc::now(),
        }
    }

    /// Flip the purchased flag
    pub fn toggle_purchased(&mut self) {
        self.purchased = !self.purchased;
    }

    /// Whether this item matches a name and unit, case-insensitively
    ///
    /// Unicode-aware: "Körte" and "körte" are the same item.
    pub fn matches(&self, name: &str, unit: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
            && self.unit.to_lowercase() == unit.to_lowercase()
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.name, format_quantity(self.quantity), self.unit)
    }
}

/// Format a quantity without a trailing ".0" for whole numbers
pub fn format_quantity(quantity: f64) -> String {
    // The cast saturates outside i64 range, so fall back to float
    // formatting there
    if quantity.fract() == 0.0 && quantity.abs() < i64::MAX as f64 {
        format!("{}", quantity as i64)
    } else {
        format!("{}", quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_new_defaults() {
        let item = Item::new("Milk", 2.0, "l");
        assert_eq!(item.name, "Milk");
        assert_eq!(item.quantity, 2.0);
        assert_eq!(item.unit, "l");
        assert!(!item.purchased);
    }

    #[test]
    fn test_item_ids_are_unique() {
        let a = Item::new("Milk", 1.0, "l");
        let b = Item::new("Milk", 1.0, "l");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_toggle_purchased() {
        let mut item = Item::new("Bread", 1.0, "pc");
        item.toggle_purchased();
        assert!(item.purchased);
        item.toggle_purchased();
        assert!(!item.purchased);
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let item = Item::new("Milk", 1.0, "L");
        assert!(item.matches("milk", "l"));
        assert!(item.matches("MILK", "L"));
        assert!(!item.matches("milk", "kg"));
        assert!(!item.matches("bread", "l"));
    }

    #[test]
    fn test_matches_folds_non_ascii_case() {
        let item = Item::new("Körte", 1.0, "kg");
        assert!(item.matches("körte", "kg"));
        assert!(item.matches("KÖRTE", "KG"));
        assert!(!item.matches("korte", "kg"));
    }

    #[test]
    fn test_display() {
        let item = Item::new("Milk", 2.0, "l");
        assert_eq!(format!("{}", item), "Milk 2 l");

        let item = Item::new("Flour", 1.5, "kg");
        assert_eq!(format!("{}", item), "Flour 1.5 kg");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(2.0), "2");
        assert_eq!(format_quantity(0.5), "0.5");
        assert_eq!(format_quantity(1.25), "1.25");
    }

    #[test]
    fn test_format_quantity_beyond_i64_range() {
        assert_eq!(format_quantity(1e19), "10000000000000000000");
        assert_eq!(format_quantity(1e30), "1000000000000000000000000000000");
    }

    #[test]
    fn test_item_serialization() {
        let item = Item::new("Eggs", 12.0, "pc");
        let json = serde_json::to_string(&item).unwrap();
        let deserialized: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(item, deserialized);
    }
}
