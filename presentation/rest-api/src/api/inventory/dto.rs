use poem_openapi::Object;

use business::domain::pantry_item::expiry::{ExpiryAlert, ExpiryStatus};

#[derive(Debug, Clone, Object)]
pub struct RestoreOutOfStockRequest {
    /// Name exactly as listed under out-of-stock
    pub name: String,
}

#[derive(Debug, Clone, Object)]
pub struct RestoreOutOfStockResponse {
    /// False when the name was not out of stock
    pub restored: bool,
}

#[derive(Debug, Clone, Object)]
pub struct ExpiryAlertResponse {
    pub name: String,
    /// Whole days until expiry, negative once expired
    pub days: i64,
    /// "expired" or "expiring_soon"
    pub status: String,
    /// Display count for expiring items
    #[oai(skip_serializing_if_is_none)]
    pub days_remaining: Option<i64>,
}

impl From<ExpiryAlert> for ExpiryAlertResponse {
    fn from(alert: ExpiryAlert) -> Self {
        let days_remaining = match alert.status {
            ExpiryStatus::ExpiringSoon { days_remaining } => Some(days_remaining),
            _ => None,
        };
        Self {
            status: alert.status.to_string(),
            name: alert.name,
            days: alert.days,
            days_remaining,
        }
    }
}
