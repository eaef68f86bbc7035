use chrono::{DateTime, Duration, Utc};

use super::pantry_item::value_objects::{Category, Quantity, Unit};
use super::shopping_item::model::ShoppingListEntry;

pub const DEFAULT_EXPIRY_DAYS: i64 = 7;
pub const EXPIRING_SOON_DAYS: i64 = 3;

/// Tunable constants the host may override.
#[derive(Debug, Clone, PartialEq)]
pub struct PantryPolicy {
    /// Expiry offset given to proposed restocks.
    pub default_expiry_days: i64,
    /// Items expiring within this many days (inclusive) raise an alert.
    pub expiring_soon_days: i64,
    pub default_category: Category,
    pub default_quantity: Quantity,
    pub default_unit: Unit,
}

impl Default for PantryPolicy {
    fn default() -> Self {
        Self {
            default_expiry_days: DEFAULT_EXPIRY_DAYS,
            expiring_soon_days: EXPIRING_SOON_DAYS,
            default_category: Category::General,
            default_quantity: Quantity::ONE,
            default_unit: Unit::Pieces,
        }
    }
}

impl PantryPolicy {
    /// The cart entry proposed by every suggestion for `name`.
    pub fn default_entry(&self, name: impl Into<String>, now: DateTime<Utc>) -> ShoppingListEntry {
        ShoppingListEntry {
            name: name.into(),
            category: self.default_category,
            expires_at: now + Duration::days(self.default_expiry_days),
            quantity: self.default_quantity,
            unit: self.default_unit,
        }
    }
}
