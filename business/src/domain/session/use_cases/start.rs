use async_trait::async_trait;

use crate::domain::session::errors::PantryError;
use crate::domain::session::model::Pantry;

pub struct StartSessionParams {
    /// Pre-fill the new pantry with sample stock and purchase history.
    pub seed_sample_data: bool,
}

#[async_trait]
pub trait StartSessionUseCase: Send + Sync {
    async fn execute(&self, params: StartSessionParams) -> Result<Pantry, PantryError>;
}
