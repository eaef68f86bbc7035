use crate::domain::errors::RepositoryError;
use crate::domain::pantry_item::errors::PantryItemError;

#[derive(Debug, thiserror::Error)]
pub enum PantryError {
    #[error("pantry.session_not_found")]
    SessionNotFound,
    #[error("pantry.index_out_of_bounds")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("pantry.no_pending_decision")]
    NoPendingDecision,
    #[error("pantry.decision_already_pending")]
    DecisionAlreadyPending,
    #[error("{0}")]
    InvalidItem(#[from] PantryItemError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl PantryError {
    /// Maps a failed session lookup; a missing key becomes `SessionNotFound`.
    pub fn from_lookup(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => PantryError::SessionNotFound,
            other => PantryError::Repository(other),
        }
    }
}
