use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::session::use_cases::end::{EndSessionParams, EndSessionUseCase};
use business::domain::session::use_cases::get::{GetSessionParams, GetSessionUseCase};
use business::domain::session::use_cases::start::{StartSessionParams, StartSessionUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::session::dto::SessionResponse;
use crate::api::tags::ApiTags;

pub struct SessionApi {
    start_use_case: Arc<dyn StartSessionUseCase>,
    get_use_case: Arc<dyn GetSessionUseCase>,
    end_use_case: Arc<dyn EndSessionUseCase>,
    seed_sample_data: bool,
}

impl SessionApi {
    pub fn new(
        start_use_case: Arc<dyn StartSessionUseCase>,
        get_use_case: Arc<dyn GetSessionUseCase>,
        end_use_case: Arc<dyn EndSessionUseCase>,
        seed_sample_data: bool,
    ) -> Self {
        Self {
            start_use_case,
            get_use_case,
            end_use_case,
            seed_sample_data,
        }
    }
}

/// Pantry sessions
///
/// Every session owns an independent pantry. All other routes are scoped
/// to a session id returned here.
#[OpenApi]
impl SessionApi {
    /// Start a session
    ///
    /// Creates a new pantry. `seed` overrides the configured sample-data default.
    #[oai(path = "/sessions", method = "post", tag = "ApiTags::Sessions")]
    async fn start(&self, seed: Query<Option<bool>>) -> StartSessionResponse {
        let params = StartSessionParams {
            seed_sample_data: seed.0.unwrap_or(self.seed_sample_data),
        };

        match self.start_use_case.execute(params).await {
            Ok(pantry) => StartSessionResponse::Created(Json(SessionResponse::from_pantry(
                &pantry,
                Utc::now(),
            ))),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                StartSessionResponse::InternalError(json)
            }
        }
    }

    /// Get a session snapshot
    ///
    /// Returns inventory, shopping list, history, out-of-stock names and any
    /// pending swap decision.
    #[oai(path = "/sessions/:id", method = "get", tag = "ApiTags::Sessions")]
    async fn get(&self, id: Path<String>) -> GetSessionResponse {
        let params = GetSessionParams {
            session_id: id.0.into(),
        };

        match self.get_use_case.execute(params).await {
            Ok(pantry) => {
                GetSessionResponse::Ok(Json(SessionResponse::from_pantry(&pantry, Utc::now())))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetSessionResponse::NotFound(json),
                    _ => GetSessionResponse::InternalError(json),
                }
            }
        }
    }

    /// End a session
    ///
    /// Discards the session's pantry.
    #[oai(path = "/sessions/:id", method = "delete", tag = "ApiTags::Sessions")]
    async fn end(&self, id: Path<String>) -> EndSessionResponse {
        let params = EndSessionParams {
            session_id: id.0.into(),
        };

        match self.end_use_case.execute(params).await {
            Ok(()) => EndSessionResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => EndSessionResponse::NotFound(json),
                    _ => EndSessionResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum StartSessionResponse {
    #[oai(status = 201)]
    Created(Json<SessionResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetSessionResponse {
    #[oai(status = 200)]
    Ok(Json<SessionResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum EndSessionResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
