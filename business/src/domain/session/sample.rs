use chrono::{DateTime, Duration, Utc};

use super::model::{HistoryRecord, Pantry};
use crate::domain::pantry_item::errors::PantryItemError;
use crate::domain::pantry_item::model::InventoryItem;
use crate::domain::pantry_item::value_objects::{Category, ExpiryInput, Unit};
use crate::domain::shared::value_objects::SessionId;
use crate::domain::shopping_item::model::NewItemProps;

/// (name, category, quantity, unit, acquired days ago, expires in days)
const SAMPLE_STOCK: [(&str, Category, f64, Unit, i64, i64); 4] = [
    ("Milk", Category::Dairy, 1.0, Unit::Litres, 0, 2),
    ("Yogurt", Category::Dairy, 2.0, Unit::Pieces, 10, -1),
    ("Chicken", Category::Meat, 1.0, Unit::Kilograms, 1, 4),
    ("White Bread", Category::Bakery, 1.0, Unit::Pieces, 1, 3),
];

/// (name, bought days ago)
const SAMPLE_HISTORY: [(&str, i64); 2] = [("Eggs", 16), ("Bread", 2)];

/// A pantry pre-filled with a few items and purchases, relative to `now`.
pub fn sample_pantry(session_id: SessionId, now: DateTime<Utc>) -> Result<Pantry, PantryItemError> {
    let history = SAMPLE_HISTORY
        .iter()
        .map(|(name, days_ago)| HistoryRecord::new(*name, now - Duration::days(*days_ago)))
        .collect();
    let mut pantry = Pantry::new(session_id, now).with_history(history);

    for (name, category, quantity, unit, acquired_days_ago, expires_in_days) in SAMPLE_STOCK {
        let item = InventoryItem::new(
            NewItemProps {
                name: name.to_string(),
                category,
                quantity,
                unit,
                expires_at: ExpiryInput::from(now + Duration::days(expires_in_days)),
            },
            now - Duration::days(acquired_days_ago),
        )?;
        pantry.stock(item);
    }

    Ok(pantry)
}
