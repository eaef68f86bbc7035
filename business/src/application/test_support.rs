use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use mockall::mock;
use tokio::sync::Mutex;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::pantry_item::value_objects::{Category, ExpiryInput, Unit};
use crate::domain::session::model::Pantry;
use crate::domain::session::repository::{PantrySessionRepository, SessionLock};
use crate::domain::shared::value_objects::SessionId;
use crate::domain::shopping_item::model::NewItemProps;

mock! {
    pub PantryRepo {}

    #[async_trait]
    impl PantrySessionRepository for PantryRepo {
        async fn lock(&self, session_id: &SessionId) -> Result<SessionLock, RepositoryError>;
        async fn get(&self, session_id: &SessionId) -> Result<Pantry, RepositoryError>;
        async fn create(&self, pantry: &Pantry) -> Result<(), RepositoryError>;
        async fn save(&self, pantry: &Pantry) -> Result<(), RepositoryError>;
        async fn delete(&self, session_id: &SessionId) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn test_session_id() -> SessionId {
    SessionId::new("test-session-id")
}

pub fn empty_pantry() -> Pantry {
    Pantry::new(test_session_id(), Utc::now())
}

pub fn free_lock() -> SessionLock {
    Arc::new(Mutex::new(())).try_lock_owned().unwrap()
}

/// A repository whose `get` always hands out a copy of `pantry`.
pub fn repo_with(pantry: Pantry) -> MockPantryRepo {
    let mut repo = MockPantryRepo::new();
    repo.expect_lock().returning(|_| Ok(free_lock()));
    repo.expect_get().returning(move |_| Ok(pantry.clone()));
    repo
}

pub fn missing_session_repo() -> MockPantryRepo {
    let mut repo = MockPantryRepo::new();
    repo.expect_lock()
        .returning(|_| Err(RepositoryError::NotFound));
    repo.expect_get()
        .returning(|_| Err(RepositoryError::NotFound));
    repo.expect_save().never();
    repo.expect_delete().never();
    repo
}

pub fn item_props(name: &str) -> NewItemProps {
    NewItemProps {
        name: name.to_string(),
        category: Category::General,
        quantity: 1.0,
        unit: Unit::Pieces,
        expires_at: ExpiryInput::from(Utc::now() + Duration::days(7)),
    }
}
