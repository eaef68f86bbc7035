use async_trait::async_trait;

use crate::domain::session::errors::PantryError;
use crate::domain::shared::value_objects::SessionId;

pub struct EndSessionParams {
    pub session_id: SessionId,
}

#[async_trait]
pub trait EndSessionUseCase: Send + Sync {
    async fn execute(&self, params: EndSessionParams) -> Result<(), PantryError>;
}
