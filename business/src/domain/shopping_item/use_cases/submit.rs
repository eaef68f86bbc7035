use async_trait::async_trait;

use crate::domain::session::cart::SubmissionOutcome;
use crate::domain::session::errors::PantryError;
use crate::domain::shared::value_objects::SessionId;
use crate::domain::shopping_item::model::NewItemProps;

pub struct SubmitItemParams {
    pub session_id: SessionId,
    pub item: NewItemProps,
}

#[async_trait]
pub trait SubmitItemUseCase: Send + Sync {
    async fn execute(&self, params: SubmitItemParams) -> Result<SubmissionOutcome, PantryError>;
}
