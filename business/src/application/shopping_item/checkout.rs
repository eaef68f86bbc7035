use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::pantry_item::model::InventoryItem;
use crate::domain::session::errors::PantryError;
use crate::domain::session::repository::PantrySessionRepository;
use crate::domain::shopping_item::use_cases::checkout::{CheckoutParams, CheckoutUseCase};

pub struct CheckoutUseCaseImpl {
    pub repository: Arc<dyn PantrySessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckoutUseCase for CheckoutUseCaseImpl {
    async fn execute(&self, params: CheckoutParams) -> Result<Vec<InventoryItem>, PantryError> {
        self.logger
            .info(&format!("Checking out session {}", params.session_id));

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

        let bought = pantry.checkout(Utc::now());
        self.repository.save(&pantry).await?;

        self.logger
            .info(&format!("Moved {} items into the pantry", bought.len()));
        Ok(bought)
    }
}
