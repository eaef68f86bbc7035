use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::cart::Resolution;
use crate::domain::session::errors::PantryError;
use crate::domain::session::repository::PantrySessionRepository;
use crate::domain::shopping_item::use_cases::resolve_pending::{
    ResolvePendingParams, ResolvePendingUseCase,
};

pub struct ResolvePendingUseCaseImpl {
    pub repository: Arc<dyn PantrySessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ResolvePendingUseCase for ResolvePendingUseCaseImpl {
    async fn execute(&self, params: ResolvePendingParams) -> Result<Resolution, PantryError> {
        self.logger.info(&format!(
            "Resolving pending decision for session {} (accept={})",
            params.session_id, params.accept
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

        let resolution = pantry.resolve_pending(params.accept)?;

        self.repository.save(&pantry).await?;

        if resolution.added {
            self.logger
                .info(&format!("Added {} to shopping list", resolution.name));
        } else {
            self.logger
                .warn(&format!("{} already in shopping list", resolution.name));
        }
        Ok(resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        MockPantryRepo, empty_pantry, item_props, mock_logger, repo_with, test_session_id,
    };
    use crate::domain::reference_data::ReferenceData;
    use crate::domain::session::cart::DecisionChoice;
    use crate::domain::session::model::Pantry;
    use crate::domain::shopping_item::model::ShoppingListEntry;

    fn pantry_awaiting(name: &str) -> Pantry {
        let mut pantry = empty_pantry();
        let entry = ShoppingListEntry::new(item_props(name)).unwrap();
        pantry
            .submit_new_item(entry, &ReferenceData::default().swaps)
            .unwrap();
        pantry
    }

    fn use_case(repository: MockPantryRepo) -> ResolvePendingUseCaseImpl {
        ResolvePendingUseCaseImpl {
            repository: Arc::new(repository),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_add_swap_when_accepted() {
        let mut mock_repo = repo_with(pantry_awaiting("sausage"));
        mock_repo
            .expect_save()
            .withf(|pantry| {
                pantry.pending().is_none()
                    && pantry.shopping_list()[0].name == "Lean Chicken Sausage"
            })
            .times(1)
            .returning(|_| Ok(()));

        let resolution = use_case(mock_repo)
            .execute(ResolvePendingParams {
                session_id: test_session_id(),
                accept: true,
            })
            .await
            .unwrap();

        assert_eq!(resolution.choice, DecisionChoice::Swapped);
        assert_eq!(resolution.name, "Lean Chicken Sausage");
        assert!(resolution.added);
    }

    #[tokio::test]
    async fn should_add_original_when_declined() {
        let mut mock_repo = repo_with(pantry_awaiting("white sugar syrup"));
        mock_repo
            .expect_save()
            .withf(|pantry| {
                pantry.pending().is_none()
                    && pantry.shopping_list()[0].name == "white sugar syrup"
            })
            .times(1)
            .returning(|_| Ok(()));

        let resolution = use_case(mock_repo)
            .execute(ResolvePendingParams {
                session_id: test_session_id(),
                accept: false,
            })
            .await
            .unwrap();

        assert_eq!(resolution.choice, DecisionChoice::Kept);
        assert_eq!(resolution.name, "white sugar syrup");
    }

    #[tokio::test]
    async fn should_fail_when_nothing_pending() {
        let mut mock_repo = repo_with(empty_pantry());
        mock_repo.expect_save().never();

        let result = use_case(mock_repo)
            .execute(ResolvePendingParams {
                session_id: test_session_id(),
                accept: true,
            })
            .await;

        assert!(matches!(result.unwrap_err(), PantryError::NoPendingDecision));
    }
}
