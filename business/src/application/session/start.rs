use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::session::errors::PantryError;
use crate::domain::session::model::Pantry;
use crate::domain::session::repository::PantrySessionRepository;
use crate::domain::session::sample::sample_pantry;
use crate::domain::session::use_cases::start::{StartSessionParams, StartSessionUseCase};
use crate::domain::shared::value_objects::SessionId;

pub struct StartSessionUseCaseImpl {
    pub repository: Arc<dyn PantrySessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl StartSessionUseCase for StartSessionUseCaseImpl {
    async fn execute(&self, params: StartSessionParams) -> Result<Pantry, PantryError> {
        let session_id = SessionId::generate();
        self.logger
            .info(&format!("Starting pantry session: {}", session_id));

        let now = Utc::now();
        let pantry = if params.seed_sample_data {
            sample_pantry(session_id, now)?
        } else {
            Pantry::new(session_id, now)
        };

        self.repository.create(&pantry).await?;

        self.logger.info(&format!(
            "Pantry session started: {} ({} items on hand)",
            pantry.session_id,
            pantry.inventory().len()
        ));
        Ok(pantry)
    }
}
