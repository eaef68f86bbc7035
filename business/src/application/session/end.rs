use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::errors::PantryError;
use crate::domain::session::repository::PantrySessionRepository;
use crate::domain::session::use_cases::end::{EndSessionParams, EndSessionUseCase};

pub struct EndSessionUseCaseImpl {
    pub repository: Arc<dyn PantrySessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl EndSessionUseCase for EndSessionUseCaseImpl {
    async fn execute(&self, params: EndSessionParams) -> Result<(), PantryError> {
        self.logger
            .info(&format!("Ending pantry session: {}", params.session_id));

        let _session = self
            .repository
            .lock(&params.session_id)
            .await
            .map_err(PantryError::from_lookup)?;

        self.repository
            .delete(&params.session_id)
            .await
            .map_err(PantryError::from_lookup)?;

        self.logger
            .info(&format!("Pantry session ended: {}", params.session_id));
        Ok(())
    }
}
