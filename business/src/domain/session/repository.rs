use async_trait::async_trait;
use tokio::sync::OwnedMutexGuard;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::SessionId;

use super::model::Pantry;

/// Exclusive access to one session while held. Mutations run
/// `lock` -> `get` -> change -> `save` under it.
pub type SessionLock = OwnedMutexGuard<()>;

/// Holds one [`Pantry`] per session key.
#[async_trait]
pub trait PantrySessionRepository: Send + Sync {
    /// Fails with `NotFound` for unknown sessions.
    async fn lock(&self, session_id: &SessionId) -> Result<SessionLock, RepositoryError>;
    async fn get(&self, session_id: &SessionId) -> Result<Pantry, RepositoryError>;
    /// Stores a new session. Fails with `Duplicated` if the key is taken.
    async fn create(&self, pantry: &Pantry) -> Result<(), RepositoryError>;
    /// Replaces an existing session. Never brings back a deleted one.
    async fn save(&self, pantry: &Pantry) -> Result<(), RepositoryError>;
    async fn delete(&self, session_id: &SessionId) -> Result<(), RepositoryError>;
}
