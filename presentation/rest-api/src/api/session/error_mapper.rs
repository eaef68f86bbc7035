use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::session::errors::PantryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for PantryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            PantryError::InvalidItem(_) => (StatusCode::BAD_REQUEST, "ValidationError"),
            PantryError::SessionNotFound | PantryError::IndexOutOfBounds { .. } => {
                (StatusCode::NOT_FOUND, "NotFound")
            }
            PantryError::NoPendingDecision | PantryError::DecisionAlreadyPending => {
                (StatusCode::CONFLICT, "Conflict")
            }
            PantryError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, Json(ErrorResponse::new(name, self.to_string())))
    }
}
