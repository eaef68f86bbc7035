use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::errors::PantryError;
use crate::domain::session::repository::PantrySessionRepository;
use crate::domain::shopping_item::model::ShoppingListEntry;
use crate::domain::shopping_item::use_cases::add::{AddToListParams, AddToListUseCase};

pub struct AddToListUseCaseImpl {
    pub repository: Arc<dyn PantrySessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToListUseCase for AddToListUseCaseImpl {
    async fn execute(&self, params: AddToListParams) -> Result<bool, PantryError> {
        self.logger.info(&format!(
            "Adding '{}' to shopping list of session {}",
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

        let name = entry.name.clone();
        if !pantry.add_to_list(entry) {
            // Nothing changed, nothing to save
            self.logger
                .warn(&format!("{} already in shopping list", name));
            return Ok(false);
        }

        self.repository.save(&pantry).await?;

        self.logger
            .info(&format!("Added {} to shopping list", name));
        Ok(true)
    }
}
