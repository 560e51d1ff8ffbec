//! # Store Errors

use thiserror::Error;

use super::item::ItemId;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No item carries the requested id
    #[error("Item with ID {0} not found")]
    NotFound(ItemId),

    /// A writer panicked while holding the collection lock
    #[error("Store lock poisoned")]
    Poisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            StoreError::NotFound(42).to_string(),
            "Item with ID 42 not found"
        );
    }
}
