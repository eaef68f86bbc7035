use chrono::{DateTime, Utc};
use serde::Serialize;

use super::errors::PantryItemError;
use super::value_objects::{Category, Quantity, Unit};
use crate::domain::shopping_item::model::{NewItemProps, ShoppingListEntry};

/// An item currently on hand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryItem {
    pub name: String,
    pub category: Category,
    pub acquired_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub quantity: Quantity,
    pub unit: Unit,
}

impl InventoryItem {
    pub fn new(props: NewItemProps, acquired_at: DateTime<Utc>) -> Result<Self, PantryItemError> {
        let entry = ShoppingListEntry::new(props)?;
        Ok(Self::from_entry(entry, acquired_at))
    }

    /// Converts a cart entry into stock bought at `acquired_at`.
    pub fn from_entry(entry: ShoppingListEntry, acquired_at: DateTime<Utc>) -> Self {
        Self {
            name: entry.name,
            category: entry.category,
            acquired_at,
            expires_at: entry.expires_at,
            quantity: entry.quantity,
            unit: entry.unit,
        }
    }
}
