use async_trait::async_trait;

use crate::domain::session::errors::PantryError;
use crate::domain::shared::value_objects::SessionId;

pub struct RestoreOutOfStockParams {
    pub session_id: SessionId,
    pub name: String,
}

/// Returns whether the item was added to the list.
#[async_trait]
pub trait RestoreOutOfStockUseCase: Send + Sync {
    async fn execute(&self, params: RestoreOutOfStockParams) -> Result<bool, PantryError>;
}
