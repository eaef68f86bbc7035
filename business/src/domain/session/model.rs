use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::pantry_item::model::InventoryItem;
use crate::domain::shared::value_objects::SessionId;
use crate::domain::shopping_item::model::ShoppingListEntry;

/// When an item was last bought. Maintained outside the cart operations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRecord {
    pub name: String,
    pub last_bought: DateTime<Utc>,
}

impl HistoryRecord {
    pub fn new(name: impl Into<String>, last_bought: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            last_bought,
        }
    }
}

/// A submitted item held back until the user accepts or declines its healthier swap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PendingDecision {
    pub original: ShoppingListEntry,
    /// Lowercase, as stored in the swap table.
    pub suggested_name: String,
}

/// The domain store of one session: stock, cart, purchase history and
/// names that ran out, plus at most one pending swap decision.
///
/// Shopping list names are unique (case-sensitive) and out-of-stock names
/// are distinct; both are enforced by the operations in `cart.rs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Pantry {
    pub session_id: SessionId,
    pub created_at: DateTime<Utc>,
    pub(super) inventory: Vec<InventoryItem>,
    pub(super) shopping_list: Vec<ShoppingListEntry>,
    pub(super) history: Vec<HistoryRecord>,
    pub(super) out_of_stock: Vec<String>,
    pub(super) pending: Option<PendingDecision>,
}

impl Pantry {
    pub fn new(session_id: SessionId, created_at: DateTime<Utc>) -> Self {
        Self {
            session_id,
            created_at,
            inventory: Vec::new(),
            shopping_list: Vec::new(),
            history: Vec::new(),
            out_of_stock: Vec::new(),
            pending: None,
        }
    }

    pub fn with_history(mut self, history: Vec<HistoryRecord>) -> Self {
        self.history = history;
        self
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    pub fn shopping_list(&self) -> &[ShoppingListEntry] {
        &self.shopping_list
    }

    pub fn history(&self) -> &[HistoryRecord] {
        &self.history
    }

    pub fn out_of_stock(&self) -> &[String] {
        &self.out_of_stock
    }

    pub fn pending(&self) -> Option<&PendingDecision> {
        self.pending.as_ref()
    }

    pub fn is_out_of_stock(&self, name: &str) -> bool {
        self.out_of_stock.iter().any(|n| n == name)
    }

    pub fn has_list_entry(&self, name: &str) -> bool {
        self.shopping_list.iter().any(|e| e.name == name)
    }
}
