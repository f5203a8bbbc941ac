//! Shopping item model
//!
//! A [`ShoppingItem`] is one row of the shopping list. Items are created by the
//! store, which owns id assignment; everything else about an item only changes
//! through the store's edit operations.

use serde::{Deserialize, Serialize};

/// Identifier of a shopping item
///
/// Assigned once when the item is created and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// Create an id from its raw value
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw value
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ItemId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry in the shopping list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    /// Unique id within the list
    pub id: ItemId,

    /// Item name
    pub name: String,

    /// How many to buy
    pub quantity: u32,

    /// Whether the row is currently showing its inline edit form
    #[serde(default)]
    pub is_editing: bool,
}

impl ShoppingItem {
    /// Create a new item in the normal (not editing) state
    pub fn new(id: ItemId, name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            is_editing: false,
        }
    }

    /// Label shown under the item name
    pub fn quantity_label(&self) -> String {
        format!("Quantity : {}", self.quantity)
    }

    /// Copy of this item with the edit flag set to `editing`
    pub fn with_editing(&self, editing: bool) -> Self {
        Self {
            is_editing: editing,
            ..self.clone()
        }
    }
}
