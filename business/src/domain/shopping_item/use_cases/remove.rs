use async_trait::async_trait;

use crate::domain::session::errors::PantryError;
use crate::domain::shared::value_objects::SessionId;
use crate::domain::shopping_item::model::ShoppingListEntry;

pub struct RemoveFromListParams {
    pub session_id: SessionId,
    pub index: usize,
}

#[async_trait]
pub trait RemoveFromListUseCase: Send + Sync {
    async fn execute(&self, params: RemoveFromListParams)
    -> Result<ShoppingListEntry, PantryError>;
}
