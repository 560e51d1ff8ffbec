//! # In-Memory Item Store
//!
//! A `Vec` kept in insertion order behind a single `RwLock`. Ids come from a
//! high-water mark, so deleting the newest item never frees its id.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use super::errors::{StoreError, StoreResult};
use super::item::{Item, ItemId, ItemInput};
use super::ItemRepository;

/// Records inserted at startup
pub fn seed_items() -> Vec<ItemInput> {
    vec![
        ItemInput::new("Laptop", Some("A powerful laptop for development"), 1299.99),
        ItemInput::new("Smartphone", Some("Latest smartphone model"), 899.99),
        ItemInput::new("Headphones", Some("Noise-cancelling headphones"), 249.99),
    ]
}

#[derive(Debug, Default)]
struct Items {
    rows: Vec<Item>,
    /// Highest id ever assigned
    last_id: ItemId,
}

impl Items {
    fn position(&self, id: ItemId) -> StoreResult<usize> {
        self.rows
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

/// In-memory item store
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    items: RwLock<Items>,
}

impl InMemoryItemStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the startup records
    pub fn seeded() -> StoreResult<Self> {
        let store = Self::new();
        for input in seed_items() {
            store.create(input)?;
        }
        Ok(store)
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Items>> {
        self.items.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Items>> {
        self.items.write().map_err(|_| StoreError::Poisoned)
    }
}

impl ItemRepository for InMemoryItemStore {
    fn create(&self, input: ItemInput) -> StoreResult<Item> {
        let mut items = self.write()?;

        items.last_id += 1;
        let item = input.into_item(items.last_id);
        items.rows.push(item.clone());

        debug!(id = item.id, name = %item.name, "item created");
        Ok(item)
    }

    fn list(&self) -> StoreResult<Vec<Item>> {
        Ok(self.read()?.rows.clone())
    }

    fn get(&self, id: ItemId) -> StoreResult<Item> {
        let items = self.read()?;
        let index = items.position(id)?;
        Ok(items.rows[index].clone())
    }

    fn update(&self, id: ItemId, input: ItemInput) -> StoreResult<Item> {
        let mut items = self.write()?;
        let index = items.position(id)?;

        let existing = &mut items.rows[index];
        *existing = input.into_item(id);

        debug!(id, "item updated");
        Ok(existing.clone())
    }

    fn delete(&self, id: ItemId) -> StoreResult<()> {
        let mut items = self.write()?;
        let index = items.position(id)?;
        items.rows.remove(index);

        debug!(id, "item deleted");
        Ok(())
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.rows.len())
    }
}
