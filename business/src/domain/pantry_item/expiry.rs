use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use super::model::InventoryItem;
use super::value_objects::ExpiryInput;

/// Freshness classification of an item on hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExpiryStatus {
    /// Expiry is in the past.
    Expired,
    /// Expires within the alert window. `days_remaining` counts today.
    ExpiringSoon { days_remaining: i64 },
    Fresh,
}

impl std::fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpiryStatus::Expired => write!(f, "expired"),
            ExpiryStatus::ExpiringSoon { .. } => write!(f, "expiring_soon"),
            ExpiryStatus::Fresh => write!(f, "fresh"),
        }
    }
}

/// Whole days from `now` until `expiry`, rounded toward negative infinity.
///
/// A date-only expiry counts from midnight. Any instant strictly before `now`
/// yields a negative count, so `days < 0` exactly when the item has expired.
pub fn days_until_expiry(expiry: impl Into<ExpiryInput>, now: DateTime<Utc>) -> i64 {
    let delta = expiry.into().normalize() - now;
    let days = delta.num_days();
    if delta < TimeDelta::zero() && delta != TimeDelta::days(days) {
        days - 1
    } else {
        days
    }
}

/// Classifies a day count against the alert window.
///
/// Business rules:
/// - Negative -> Expired
/// - 0..=window -> ExpiringSoon, shown as `days + 1` days remaining
/// - Beyond window -> Fresh
pub fn classify(days: i64, expiring_soon_days: i64) -> ExpiryStatus {
    if days < 0 {
        ExpiryStatus::Expired
    } else if days <= expiring_soon_days {
        ExpiryStatus::ExpiringSoon {
            days_remaining: days + 1,
        }
    } else {
        ExpiryStatus::Fresh
    }
}

pub fn expiry_status(
    item: &InventoryItem,
    now: DateTime<Utc>,
    expiring_soon_days: i64,
) -> ExpiryStatus {
    classify(days_until_expiry(item.expires_at, now), expiring_soon_days)
}

/// An item that needs attention.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpiryAlert {
    pub name: String,
    pub days: i64,
    pub status: ExpiryStatus,
}

/// Alerts for every expired or expiring item, in inventory order.
/// An empty result means everything is fresh.
pub fn expiry_alerts(
    items: &[InventoryItem],
    now: DateTime<Utc>,
    expiring_soon_days: i64,
) -> Vec<ExpiryAlert> {
    items
        .iter()
        .filter_map(|item| {
            let days = days_until_expiry(item.expires_at, now);
            match classify(days, expiring_soon_days) {
                ExpiryStatus::Fresh => None,
                status => Some(ExpiryAlert {
                    name: item.name.clone(),
                    days,
                    status,
                }),
            }
        })
        .collect()
}
