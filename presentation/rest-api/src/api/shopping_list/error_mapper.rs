use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::pantry_item::errors::PantryItemError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for PantryItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("ValidationError", self.to_string())),
        )
    }
}
