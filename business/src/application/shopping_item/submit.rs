use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::reference_data::ReferenceData;
use crate::domain::session::cart::SubmissionOutcome;
use crate::domain::session::errors::PantryError;
use crate::domain::session::repository::PantrySessionRepository;
use crate::domain::shopping_item::model::ShoppingListEntry;
use crate::domain::shopping_item::use_cases::submit::{SubmitItemParams, SubmitItemUseCase};

pub struct SubmitItemUseCaseImpl {
    pub repository: Arc<dyn PantrySessionRepository>,
    pub reference: Arc<ReferenceData>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SubmitItemUseCase for SubmitItemUseCaseImpl {
    async fn execute(&self, params: SubmitItemParams) -> Result<SubmissionOutcome, PantryError> {
        self.logger.info(&format!(
            "Submitting item '{}' to session {}",
            params.item.name, params.session_id
        ));

        let entry = ShoppingListEntry::new(params.item)?;
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

        let outcome = pantry
            .submit_new_item(entry, &self.reference.swaps)
            .inspect_err(|e| {
                self.logger
                    .warn(&format!("Submission rejected for {}: {}", params.session_id, e))
            })?;

        self.repository.save(&pantry).await?;

        match &outcome {
            SubmissionOutcome::DirectlyAdded { added: true } => {
                self.logger.info("Item added to shopping list")
            }
            SubmissionOutcome::DirectlyAdded { added: false } => {
                self.logger.warn("Item already in shopping list")
            }
            SubmissionOutcome::AwaitingHealthDecision { suggested_name } => self
                .logger
                .info(&format!("Healthier alternative suggested: {}", suggested_name)),
        }
        Ok(outcome)
    }
}
