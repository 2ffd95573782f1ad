//! Basket Core Library
//!
//! This crate provides the core functionality for basket, a terminal
//! shopping list. The list is session-scoped: it lives in memory for the
//! duration of one interactive session and is never persisted.
//!
//! # Quick Start
//!
//! ```text
//! let mut store = ListStore::new();
//!
//! // Add an item (raw text input, validated)
//! let item = store.add_item("Milk", "2", "l")?;
//!
//! // Mark it purchased
//! store.toggle_purchased(item.id);
//!
//! // How much is left to buy?
//! let remaining = store.unpurchased_count();
//! ```
//!
//! # Modules
//!
//! - `store`: In-memory list store (main entry point)
//! - `models`: The `Item` data structure
//! - `error`: Validation error taxonomy
//! - `config`: Application configuration

pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use config::Config;
pub use error::{ValidationError, ValidationResult};
pub use models::Item;
pub use store::ListStore;
