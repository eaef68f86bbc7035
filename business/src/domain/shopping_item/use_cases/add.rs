use async_trait::async_trait;

use crate::domain::session::errors::PantryError;
use crate::domain::shared::value_objects::SessionId;
use crate::domain::shopping_item::model::NewItemProps;

pub struct AddToListParams {
    pub session_id: SessionId,
    pub item: NewItemProps,
}

/// Returns `false` when an entry with the same name is already listed.
#[async_trait]
pub trait AddToListUseCase: Send + Sync {
    async fn execute(&self, params: AddToListParams) -> Result<bool, PantryError>;
}
