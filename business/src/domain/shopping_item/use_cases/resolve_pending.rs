use async_trait::async_trait;

use crate::domain::session::cart::Resolution;
use crate::domain::session::errors::PantryError;
use crate::domain::shared::value_objects::SessionId;

pub struct ResolvePendingParams {
    pub session_id: SessionId,
    pub accept: bool,
}

#[async_trait]
pub trait ResolvePendingUseCase: Send + Sync {
    async fn execute(&self, params: ResolvePendingParams) -> Result<Resolution, PantryError>;
}
