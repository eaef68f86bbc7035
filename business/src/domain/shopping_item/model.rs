use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::pantry_item::errors::PantryItemError;
use crate::domain::pantry_item::value_objects::{Category, ExpiryInput, Quantity, Unit};

/// Raw payload for a new item, as submitted by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItemProps {
    pub name: String,
    pub category: Category,
    pub quantity: f64,
    pub unit: Unit,
    pub expires_at: ExpiryInput,
}

/// An item selected for purchase but not yet on hand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingListEntry {
    pub name: String,
    pub category: Category,
    pub expires_at: DateTime<Utc>,
    pub quantity: Quantity,
    pub unit: Unit,
}

impl ShoppingListEntry {
    pub fn new(props: NewItemProps) -> Result<Self, PantryItemError> {
        if props.name.trim().is_empty() {
            return Err(PantryItemError::NameEmpty);
        }

        Ok(Self {
            name: props.name,
            category: props.category,
            expires_at: props.expires_at.normalize(),
            quantity: Quantity::new(props.quantity)?,
            unit: props.unit,
        })
    }

    /// Same entry under another name.
    pub fn renamed(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }
}
