use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::errors::PantryError;
use crate::domain::session::repository::PantrySessionRepository;
use crate::domain::shopping_item::model::ShoppingListEntry;
use crate::domain::shopping_item::use_cases::remove::{
    RemoveFromListParams, RemoveFromListUseCase,
};

pub struct RemoveFromListUseCaseImpl {
    pub repository: Arc<dyn PantrySessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFromListUseCase for RemoveFromListUseCaseImpl {
    async fn execute(
        &self,
        params: RemoveFromListParams,
    ) -> Result<ShoppingListEntry, PantryError> {
        self.logger.info(&format!(
            "Removing shopping list entry #{} from session {}",
            params.index, params.session_id
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

        let removed = pantry.remove_from_list(params.index)?;
        self.repository.save(&pantry).await?;

        self.logger
            .info(&format!("Removed {} from shopping list", removed.name));
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        empty_pantry, item_props, mock_logger, repo_with, test_session_id,
    };

    #[tokio::test]
    async fn should_remove_entry_at_index() {
        let mut pantry = empty_pantry();
        pantry.add_to_list(ShoppingListEntry::new(item_props("Oats")).unwrap());
        pantry.add_to_list(ShoppingListEntry::new(item_props("Rice")).unwrap());
        let mut mock_repo = repo_with(pantry);
        mock_repo
            .expect_save()
            .withf(|pantry| {
                pantry.shopping_list().len() == 1 && pantry.shopping_list()[0].name == "Oats"
            })
            .times(1)
            .returning(|_| Ok(()));

        let use_case = RemoveFromListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let removed = use_case
            .execute(RemoveFromListParams {
                session_id: test_session_id(),
                index: 1,
            })
            .await
            .unwrap();

        assert_eq!(removed.name, "Rice");
    }

    #[tokio::test]
    async fn should_fail_when_index_out_of_bounds() {
        let mut mock_repo = repo_with(empty_pantry());
        mock_repo.expect_save().never();

        let use_case = RemoveFromListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveFromListParams {
                session_id: test_session_id(),
                index: 0,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            PantryError::IndexOutOfBounds { index: 0, len: 0 }
        ));
    }
}
