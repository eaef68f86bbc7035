use async_trait::async_trait;

use crate::domain::pantry_item::expiry::ExpiryAlert;
use crate::domain::session::errors::PantryError;
use crate::domain::shared::value_objects::SessionId;

pub struct GetExpiryAlertsParams {
    pub session_id: SessionId,
}

#[async_trait]
pub trait GetExpiryAlertsUseCase: Send + Sync {
    async fn execute(&self, params: GetExpiryAlertsParams)
    -> Result<Vec<ExpiryAlert>, PantryError>;
}
