use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::pantry_item::use_cases::restore_out_of_stock::{
    RestoreOutOfStockParams, RestoreOutOfStockUseCase,
};
use crate::domain::policy::PantryPolicy;
use crate::domain::session::errors::PantryError;
use crate::domain::session::repository::PantrySessionRepository;

pub struct RestoreOutOfStockUseCaseImpl {
    pub repository: Arc<dyn PantrySessionRepository>,
    pub policy: PantryPolicy,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RestoreOutOfStockUseCase for RestoreOutOfStockUseCaseImpl {
    async fn execute(&self, params: RestoreOutOfStockParams) -> Result<bool, PantryError> {
        self.logger.info(&format!(
            "Adding back '{}' for session {}",
            params.name, params.session_id
        ));

        let _session = self
            .repository
            .lock(&params.session_id)
            .await
            .map_err(PantryError::from_lookup)?;
        let mut pantry = self
            .repository
            .get(&params.session_id)
            .await
            .map_err(PantryError::from_lookup)?;

        let added = pantry.restore_out_of_stock(&params.name, &self.policy, Utc::now());
        self.repository.save(&pantry).await?;

        if !added {
            self.logger
                .warn(&format!("{} already in shopping list", params.name));
        }
        Ok(added)
    }
}
