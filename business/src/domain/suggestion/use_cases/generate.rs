use async_trait::async_trait;

use crate::domain::session::errors::PantryError;
use crate::domain::shared::value_objects::SessionId;
use crate::domain::suggestion::model::Suggestions;

pub struct GenerateSuggestionsParams {
    pub session_id: SessionId,
}

#[async_trait]
pub trait GenerateSuggestionsUseCase: Send + Sync {
    async fn execute(&self, params: GenerateSuggestionsParams) -> Result<Suggestions, PantryError>;
}
