use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::errors::PantryError;
use crate::domain::session::model::Pantry;
use crate::domain::session::repository::PantrySessionRepository;
use crate::domain::session::use_cases::get::{GetSessionParams, GetSessionUseCase};

pub struct GetSessionUseCaseImpl {
    pub repository: Arc<dyn PantrySessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetSessionUseCase for GetSessionUseCaseImpl {
    async fn execute(&self, params: GetSessionParams) -> Result<Pantry, PantryError> {
        self.logger
            .debug(&format!("Fetching pantry session: {}", params.session_id));

        self.repository
            .get(&params.session_id)
            .await
            .map_err(PantryError::from_lookup)
    }
}
