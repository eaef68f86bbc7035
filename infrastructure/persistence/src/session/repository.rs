use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use business::domain::errors::RepositoryError;
use business::domain::session::model::Pantry;
use business::domain::session::repository::{PantrySessionRepository, SessionLock};
use business::domain::shared::value_objects::SessionId;

/// Keeps every session's pantry in process memory, keyed by session id.
/// Nothing survives a restart.
///
/// Lock order is `locks` then `sessions`.
#[derive(Default)]
pub struct PantrySessionRepositoryInMemory {
    locks: Mutex<HashMap<SessionId, Arc<Mutex<()>>>>,
    sessions: RwLock<HashMap<SessionId, Pantry>>,
}

impl PantrySessionRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl PantrySessionRepository for PantrySessionRepositoryInMemory {
    async fn lock(&self, session_id: &SessionId) -> Result<SessionLock, RepositoryError> {
        let slot = {
            let mut locks = self.locks.lock().await;
            if !self.sessions.read().await.contains_key(session_id) {
                return Err(RepositoryError::NotFound);
            }
            locks.entry(session_id.clone()).or_default().clone()
        };
        Ok(slot.lock_owned().await)
    }

    async fn get(&self, session_id: &SessionId) -> Result<Pantry, RepositoryError> {
        self.sessions
            .read()
            .await
            .get(session_id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, pantry: &Pantry) -> Result<(), RepositoryError> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&pantry.session_id) {
            return Err(RepositoryError::Duplicated);
        }
        tracing::debug!(session = %pantry.session_id, "creating pantry session");
        sessions.insert(pantry.session_id.clone(), pantry.clone());
        Ok(())
    }

    async fn save(&self, pantry: &Pantry) -> Result<(), RepositoryError> {
        let mut sessions = self.sessions.write().await;
        let stored = sessions
            .get_mut(&pantry.session_id)
            .ok_or(RepositoryError::NotFound)?;
        tracing::debug!(session = %pantry.session_id, "storing pantry session");
        *stored = pantry.clone();
        Ok(())
    }

    async fn delete(&self, session_id: &SessionId) -> Result<(), RepositoryError> {
        let mut locks = self.locks.lock().await;
        locks.remove(session_id);
        self.sessions
            .write()
            .await
            .remove(session_id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}
