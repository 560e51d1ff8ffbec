//! # Item Store
//!
//! The authoritative, process-lifetime collection of items.
//!
//! All access goes through [`ItemRepository`]. The only implementation is
//! [`InMemoryItemStore`], which guards the whole collection with one lock so
//! every operation observes and produces a consistent snapshot.

mod errors;
mod item;
mod memory;

pub use errors::{StoreError, StoreResult};
pub use item::{Item, ItemInput, ItemId};
pub use memory::{seed_items, InMemoryItemStore};

/// Item repository trait
///
/// Abstracts storage operations for items.
pub trait ItemRepository: Send + Sync {
    /// Insert a new item and return it with its assigned id
    fn create(&self, input: ItemInput) -> StoreResult<Item>;

    /// All items in insertion order
    fn list(&self) -> StoreResult<Vec<Item>>;

    /// Find an item by id
    fn get(&self, id: ItemId) -> StoreResult<Item>;

    /// Overwrite every mutable field of an existing item
    fn update(&self, id: ItemId, input: ItemInput) -> StoreResult<Item>;

    /// Remove an item permanently
    fn delete(&self, id: ItemId) -> StoreResult<()>;

    /// Number of stored items
    fn len(&self) -> StoreResult<usize>;

    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}
