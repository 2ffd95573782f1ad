//! Validation error handling
//!
//! Every failure the store can report is a `ValidationError`. All variants
//! are caller-recoverable: the store is left untouched and the caller is
//! expected to show the message and let the user correct the input.

use thiserror::Error;

/// Errors reported by list mutations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty after trimming
    #[error("all fields required")]
    MissingField,

    /// Quantity did not parse, or was not a positive finite number
    #[error("quantity must be a positive number")]
    InvalidQuantity,

    /// An item with the same name and unit already exists
    #[error("duplicate item")]
    DuplicateItem,
}

/// Result type for list mutations
pub type ValidationResult<T> = Result<T, ValidationError>;
