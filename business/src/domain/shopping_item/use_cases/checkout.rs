use async_trait::async_trait;

use crate::domain::pantry_item::model::InventoryItem;
use crate::domain::session::errors::PantryError;
use crate::domain::shared::value_objects::SessionId;

pub struct CheckoutParams {
    pub session_id: SessionId,
}

#[async_trait]
pub trait CheckoutUseCase: Send + Sync {
    async fn execute(&self, params: CheckoutParams) -> Result<Vec<InventoryItem>, PantryError>;
}
