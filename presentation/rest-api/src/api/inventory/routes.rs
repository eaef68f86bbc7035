use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::pantry_item::use_cases::expiry_alerts::{
    GetExpiryAlertsParams, GetExpiryAlertsUseCase,
};
use business::domain::pantry_item::use_cases::remove::{
    RemoveFromInventoryParams, RemoveFromInventoryUseCase,
};
use business::domain::pantry_item::use_cases::restore_out_of_stock::{
    RestoreOutOfStockParams, RestoreOutOfStockUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::inventory::dto::{
    ExpiryAlertResponse, RestoreOutOfStockRequest, RestoreOutOfStockResponse,
};
use crate::api::session::dto::InventoryItemResponse;
use crate::api::tags::ApiTags;

pub struct InventoryApi {
    remove_use_case: Arc<dyn RemoveFromInventoryUseCase>,
    restore_use_case: Arc<dyn RestoreOutOfStockUseCase>,
    expiry_alerts_use_case: Arc<dyn GetExpiryAlertsUseCase>,
}

impl InventoryApi {
    pub fn new(
        remove_use_case: Arc<dyn RemoveFromInventoryUseCase>,
        restore_use_case: Arc<dyn RestoreOutOfStockUseCase>,
        expiry_alerts_use_case: Arc<dyn GetExpiryAlertsUseCase>,
    ) -> Self {
        Self {
            remove_use_case,
            restore_use_case,
            expiry_alerts_use_case,
        }
    }
}

/// Pantry stock
#[OpenApi]
impl InventoryApi {
    /// Remove a pantry item by position
    ///
    /// The item's name is remembered as out of stock.
    #[oai(
        path = "/sessions/:id/inventory/:index",
        method = "delete",
        tag = "ApiTags::Inventory"
    )]
    async fn remove(&self, id: Path<String>, index: Path<u32>) -> RemoveFromInventoryResponse {
        let params = RemoveFromInventoryParams {
            session_id: id.0.into(),
            index: index.0 as usize,
        };

        match self.remove_use_case.execute(params).await {
            Ok(item) => RemoveFromInventoryResponse::Ok(Json(InventoryItemResponse::from_item(
                item,
                Utc::now(),
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveFromInventoryResponse::NotFound(json),
                    _ => RemoveFromInventoryResponse::InternalError(json),
                }
            }
        }
    }

    /// Restore an out-of-stock item
    ///
    /// Puts the name back on the shopping list with default details.
    #[oai(
        path = "/sessions/:id/out-of-stock/restore",
        method = "post",
        tag = "ApiTags::Inventory"
    )]
    async fn restore(
        &self,
        id: Path<String>,
        body: Json<RestoreOutOfStockRequest>,
    ) -> RestoreOutOfStockApiResponse {
        let params = RestoreOutOfStockParams {
            session_id: id.0.into(),
            name: body.0.name,
        };

        match self.restore_use_case.execute(params).await {
            Ok(restored) => {
                RestoreOutOfStockApiResponse::Ok(Json(RestoreOutOfStockResponse { restored }))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RestoreOutOfStockApiResponse::NotFound(json),
                    _ => RestoreOutOfStockApiResponse::InternalError(json),
                }
            }
        }
    }

    /// Expiry alerts
    ///
    /// Expired and soon-expiring items in pantry order. Empty when everything
    /// is fresh.
    #[oai(
        path = "/sessions/:id/expiry-alerts",
        method = "get",
        tag = "ApiTags::Inventory"
    )]
    async fn expiry_alerts(&self, id: Path<String>) -> ExpiryAlertsResponse {
        let params = GetExpiryAlertsParams {
            session_id: id.0.into(),
        };

        match self.expiry_alerts_use_case.execute(params).await {
            Ok(alerts) => {
                let responses: Vec<ExpiryAlertResponse> =
                    alerts.into_iter().map(|a| a.into()).collect();
                ExpiryAlertsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ExpiryAlertsResponse::NotFound(json),
                    _ => ExpiryAlertsResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveFromInventoryResponse {
    #[oai(status = 200)]
    Ok(Json<InventoryItemResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RestoreOutOfStockApiResponse {
    #[oai(status = 200)]
    Ok(Json<RestoreOutOfStockResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ExpiryAlertsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ExpiryAlertResponse>>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
