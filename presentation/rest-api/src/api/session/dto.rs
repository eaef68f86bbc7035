use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::pantry_item::expiry::days_until_expiry;
use business::domain::pantry_item::model::InventoryItem;
use business::domain::session::model::{HistoryRecord, Pantry, PendingDecision};
use business::domain::shopping_item::model::ShoppingListEntry;

#[derive(Debug, Clone, Object)]
pub struct ShoppingListEntryResponse {
    pub name: String,
    /// Category label, e.g. "Dairy"
    pub category: String,
    pub expires_at: DateTime<Utc>,
    pub quantity: f64,
    /// Unit label, e.g. "pcs"
    pub unit: String,
}

impl From<ShoppingListEntry> for ShoppingListEntryResponse {
    fn from(entry: ShoppingListEntry) -> Self {
        Self {
            name: entry.name,
            category: entry.category.to_string(),
            expires_at: entry.expires_at,
            quantity: entry.quantity.value(),
            unit: entry.unit.to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct InventoryItemResponse {
    pub name: String,
    pub category: String,
    pub acquired_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub quantity: f64,
    pub unit: String,
    /// Whole days until expiry, negative once expired
    pub days_until_expiry: i64,
}

impl InventoryItemResponse {
    pub fn from_item(item: InventoryItem, now: DateTime<Utc>) -> Self {
        Self {
            days_until_expiry: days_until_expiry(item.expires_at, now),
            name: item.name,
            category: item.category.to_string(),
            acquired_at: item.acquired_at,
            expires_at: item.expires_at,
            quantity: item.quantity.value(),
            unit: item.unit.to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct HistoryRecordResponse {
    pub name: String,
    pub last_bought: DateTime<Utc>,
}

impl From<&HistoryRecord> for HistoryRecordResponse {
    fn from(record: &HistoryRecord) -> Self {
        Self {
            name: record.name.clone(),
            last_bought: record.last_bought,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PendingDecisionResponse {
    /// The entry as submitted
    pub original: ShoppingListEntryResponse,
    /// Healthier alternative, lowercase
    pub suggested_name: String,
}

impl From<&PendingDecision> for PendingDecisionResponse {
    fn from(pending: &PendingDecision) -> Self {
        Self {
            original: pending.original.clone().into(),
            suggested_name: pending.suggested_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SessionResponse {
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    pub inventory: Vec<InventoryItemResponse>,
    pub shopping_list: Vec<ShoppingListEntryResponse>,
    pub history: Vec<HistoryRecordResponse>,
    pub out_of_stock: Vec<String>,
    #[oai(skip_serializing_if_is_none)]
    pub pending: Option<PendingDecisionResponse>,
}

impl SessionResponse {
    pub fn from_pantry(pantry: &Pantry, now: DateTime<Utc>) -> Self {
        Self {
            session_id: pantry.session_id.to_string(),
            created_at: pantry.created_at,
            inventory: pantry
                .inventory()
                .iter()
                .cloned()
                .map(|item| InventoryItemResponse::from_item(item, now))
                .collect(),
            shopping_list: pantry
                .shopping_list()
                .iter()
                .cloned()
                .map(Into::into)
                .collect(),
            history: pantry.history().iter().map(Into::into).collect(),
            out_of_stock: pantry.out_of_stock().to_vec(),
            pending: pantry.pending().map(Into::into),
        }
    }
}
