//! # Item Model

use serde::{Deserialize, Serialize};

/// Item identifier, assigned by the store
pub type ItemId = i64;

/// A stored item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique, never reused
    pub id: ItemId,

    pub name: String,

    /// Serialized as `null` when absent
    pub description: Option<String>,

    pub price: f64,
}

/// The mutable field set of an item
///
/// Used for both create and update. Update replaces every field, so a
/// missing description clears the stored one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

impl ItemInput {
    /// Create an input with a description
    pub fn new(name: impl Into<String>, description: Option<&str>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: description.map(str::to_string),
            price,
        }
    }

    pub(crate) fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_serializes_null_description() {
        let item = ItemInput::new("Mouse", None, 29.99).into_item(4);
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 4,
                "name": "Mouse",
                "description": null,
                "price": 29.99
            })
        );
    }
}
