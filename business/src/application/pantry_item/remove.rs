use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::pantry_item::model::InventoryItem;
use crate::domain::pantry_item::use_cases::remove::{
    RemoveFromInventoryParams, RemoveFromInventoryUseCase,
};
use crate::domain::session::errors::PantryError;
use crate::domain::session::repository::PantrySessionRepository;

pub struct RemoveFromInventoryUseCaseImpl {
    pub repository: Arc<dyn PantrySessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFromInventoryUseCase for RemoveFromInventoryUseCaseImpl {
    async fn execute(
        &self,
        params: RemoveFromInventoryParams,
    ) -> Result<InventoryItem, PantryError> {
        self.logger.info(&format!(
            "Removing pantry item #{} from session {}",
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

        let removed = pantry.remove_from_inventory(params.index)?;
        self.repository.save(&pantry).await?;

        self.logger
            .info(&format!("Removed {}, now tracked as out of stock", removed.name));
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        empty_pantry, item_props, mock_logger, repo_with, test_session_id,
    };
    use chrono::Utc;

    #[tokio::test]
    async fn should_remove_item_and_track_it_as_out_of_stock() {
        let mut pantry = empty_pantry();
        pantry.stock(InventoryItem::new(item_props("Milk"), Utc::now()).unwrap());
        let mut mock_repo = repo_with(pantry);
        mock_repo
            .expect_save()
            .withf(|pantry| pantry.inventory().is_empty() && pantry.is_out_of_stock("Milk"))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = RemoveFromInventoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let removed = use_case
            .execute(RemoveFromInventoryParams {
                session_id: test_session_id(),
                index: 0,
            })
            .await
            .unwrap();

        assert_eq!(removed.name, "Milk");
    }

    #[tokio::test]
    async fn should_fail_when_index_out_of_bounds() {
        let mut mock_repo = repo_with(empty_pantry());
        mock_repo.expect_save().never();

        let use_case = RemoveFromInventoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveFromInventoryParams {
                session_id: test_session_id(),
                index: 3,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            PantryError::IndexOutOfBounds { index: 3, len: 0 }
        ));
    }
}
