use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::suggestion::use_cases::generate::{
    GenerateSuggestionsParams, GenerateSuggestionsUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::suggestion::dto::SuggestionsResponse;
use crate::api::tags::ApiTags;

pub struct SuggestionApi {
    generate_use_case: Arc<dyn GenerateSuggestionsUseCase>,
}

impl SuggestionApi {
    pub fn new(generate_use_case: Arc<dyn GenerateSuggestionsUseCase>) -> Self {
        Self { generate_use_case }
    }
}

#[OpenApi]
impl SuggestionApi {
    /// Shopping suggestions
    ///
    /// Items that ran out, restocks due by usage pattern, and healthier
    /// alternatives to what is in the pantry. Accept a ran-out suggestion
    /// through the restore route and the others through the shopping list.
    #[oai(
        path = "/sessions/:id/suggestions",
        method = "get",
        tag = "ApiTags::Suggestions"
    )]
    async fn generate(&self, id: Path<String>) -> GenerateSuggestionsResponse {
        let params = GenerateSuggestionsParams {
            session_id: id.0.into(),
        };

        match self.generate_use_case.execute(params).await {
            Ok(suggestions) => GenerateSuggestionsResponse::Ok(Json(suggestions.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GenerateSuggestionsResponse::NotFound(json),
                    _ => GenerateSuggestionsResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GenerateSuggestionsResponse {
    #[oai(status = 200)]
    Ok(Json<SuggestionsResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
