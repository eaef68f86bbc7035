use async_trait::async_trait;

use crate::domain::pantry_item::model::InventoryItem;
use crate::domain::session::errors::PantryError;
use crate::domain::shared::value_objects::SessionId;

pub struct RemoveFromInventoryParams {
    pub session_id: SessionId,
    pub index: usize,
}

#[async_trait]
pub trait RemoveFromInventoryUseCase: Send + Sync {
    async fn execute(&self, params: RemoveFromInventoryParams)
    -> Result<InventoryItem, PantryError>;
}
