use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::policy::PantryPolicy;
use crate::domain::reference_data::ReferenceData;
use crate::domain::session::errors::PantryError;
use crate::domain::session::repository::PantrySessionRepository;
use crate::domain::suggestion::engine::suggest;
use crate::domain::suggestion::model::Suggestions;
use crate::domain::suggestion::use_cases::generate::{
    GenerateSuggestionsParams, GenerateSuggestionsUseCase,
};

pub struct GenerateSuggestionsUseCaseImpl {
    pub repository: Arc<dyn PantrySessionRepository>,
    pub reference: Arc<ReferenceData>,
    pub policy: PantryPolicy,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GenerateSuggestionsUseCase for GenerateSuggestionsUseCaseImpl {
    async fn execute(&self, params: GenerateSuggestionsParams) -> Result<Suggestions, PantryError> {
        self.logger.info(&format!(
            "Generating suggestions for session {}",
            params.session_id
        ));

        let pantry = self
            .repository
            .get(&params.session_id)
            .await
            .map_err(PantryError::from_lookup)?;

        let suggestions = suggest(&pantry, &self.reference, &self.policy, Utc::now());

        self.logger.info(&format!(
            "Generated {} suggestions ({} ran out, {} restock, {} healthier)",
            suggestions.len(),
            suggestions.ran_out.len(),
            suggestions.restock.len(),
            suggestions.health_swaps.len()
        ));
        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        MockPantryRepo, empty_pantry, item_props, missing_session_repo, mock_logger, repo_with,
        test_session_id,
    };
    use crate::domain::pantry_item::model::InventoryItem;
    use crate::domain::session::model::{HistoryRecord, Pantry};
    use chrono::Duration;

    fn use_case(repository: MockPantryRepo) -> GenerateSuggestionsUseCaseImpl {
        GenerateSuggestionsUseCaseImpl {
            repository: Arc::new(repository),
            reference: Arc::new(ReferenceData::default()),
            policy: PantryPolicy::default(),
            logger: mock_logger(),
        }
    }

    fn pantry_with_eggs_history() -> Pantry {
        Pantry::new(test_session_id(), Utc::now()).with_history(vec![HistoryRecord::new(
            "Eggs",
            Utc::now() - Duration::days(16),
        )])
    }

    #[tokio::test]
    async fn should_generate_all_three_streams() {
        let mut pantry = pantry_with_eggs_history();
        pantry.stock(InventoryItem::new(item_props("Milk"), Utc::now()).unwrap());
        pantry.stock(InventoryItem::new(item_props("Sausage"), Utc::now()).unwrap());
        pantry.remove_from_inventory(0).unwrap();

        let suggestions = use_case(repo_with(pantry))
            .execute(GenerateSuggestionsParams {
                session_id: test_session_id(),
            })
            .await
            .unwrap();

        assert_eq!(suggestions.ran_out[0].item_name, "Milk");
        assert_eq!(suggestions.restock[0].item_name, "Eggs");
        assert_eq!(suggestions.health_swaps[0].item_name, "Lean Chicken Sausage");
    }

    #[tokio::test]
    async fn should_not_predict_item_already_out_of_stock() {
        let mut pantry = pantry_with_eggs_history();
        pantry.stock(InventoryItem::new(item_props("Eggs"), Utc::now()).unwrap());
        pantry.remove_from_inventory(0).unwrap();

        let suggestions = use_case(repo_with(pantry))
            .execute(GenerateSuggestionsParams {
                session_id: test_session_id(),
            })
            .await
            .unwrap();

        assert_eq!(suggestions.ran_out.len(), 1);
        assert!(suggestions.restock.is_empty());
    }

    #[tokio::test]
    async fn should_return_empty_streams_for_empty_pantry() {
        let suggestions = use_case(repo_with(empty_pantry()))
            .execute(GenerateSuggestionsParams {
                session_id: test_session_id(),
            })
            .await
            .unwrap();

        assert!(suggestions.is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_when_session_unknown() {
        let result = use_case(missing_session_repo())
            .execute(GenerateSuggestionsParams {
                session_id: test_session_id(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), PantryError::SessionNotFound));
    }
}
