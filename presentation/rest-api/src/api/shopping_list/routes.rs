use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::policy::PantryPolicy;
use business::domain::shopping_item::use_cases::add::{AddToListParams, AddToListUseCase};
use business::domain::shopping_item::use_cases::checkout::{CheckoutParams, CheckoutUseCase};
use business::domain::shopping_item::use_cases::remove::{
    RemoveFromListParams, RemoveFromListUseCase,
};
use business::domain::shopping_item::use_cases::resolve_pending::{
    ResolvePendingParams, ResolvePendingUseCase,
};
use business::domain::shopping_item::use_cases::submit::{SubmitItemParams, SubmitItemUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::session::dto::{InventoryItemResponse, ShoppingListEntryResponse};
use crate::api::shopping_list::dto::{
    AddToListResponse, NewItemRequest, ResolutionResponse, ResolvePendingRequest,
    SubmitItemResponseBody,
};
use crate::api::tags::ApiTags;

pub struct ShoppingListApi {
    submit_use_case: Arc<dyn SubmitItemUseCase>,
    resolve_pending_use_case: Arc<dyn ResolvePendingUseCase>,
    add_use_case: Arc<dyn AddToListUseCase>,
    remove_use_case: Arc<dyn RemoveFromListUseCase>,
    checkout_use_case: Arc<dyn CheckoutUseCase>,
    policy: PantryPolicy,
}

impl ShoppingListApi {
    pub fn new(
        submit_use_case: Arc<dyn SubmitItemUseCase>,
        resolve_pending_use_case: Arc<dyn ResolvePendingUseCase>,
        add_use_case: Arc<dyn AddToListUseCase>,
        remove_use_case: Arc<dyn RemoveFromListUseCase>,
        checkout_use_case: Arc<dyn CheckoutUseCase>,
        policy: PantryPolicy,
    ) -> Self {
        Self {
            submit_use_case,
            resolve_pending_use_case,
            add_use_case,
            remove_use_case,
            checkout_use_case,
            policy,
        }
    }
}

/// Shopping list (cart) operations
#[OpenApi]
impl ShoppingListApi {
    /// Submit a new item
    ///
    /// Adds the item directly, or holds it back when a healthier alternative
    /// exists and waits for a decision.
    #[oai(
        path = "/sessions/:id/items",
        method = "post",
        tag = "ApiTags::ShoppingList"
    )]
    async fn submit(&self, id: Path<String>, body: Json<NewItemRequest>) -> SubmitItemResponse {
        let item = match body.0.into_props(Utc::now(), &self.policy) {
            Ok(item) => item,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return SubmitItemResponse::BadRequest(json);
            }
        };
        let params = SubmitItemParams {
            session_id: id.0.into(),
            item,
        };

        match self.submit_use_case.execute(params).await {
            Ok(outcome) => SubmitItemResponse::Ok(Json(outcome.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SubmitItemResponse::BadRequest(json),
                    404 => SubmitItemResponse::NotFound(json),
                    409 => SubmitItemResponse::Conflict(json),
                    _ => SubmitItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Resolve the pending swap decision
    ///
    /// `accept = true` lists the healthier alternative, otherwise the
    /// submitted item is listed as entered.
    #[oai(
        path = "/sessions/:id/pending-decision",
        method = "post",
        tag = "ApiTags::ShoppingList"
    )]
    async fn resolve_pending(
        &self,
        id: Path<String>,
        body: Json<ResolvePendingRequest>,
    ) -> ResolvePendingResponse {
        let params = ResolvePendingParams {
            session_id: id.0.into(),
            accept: body.0.accept,
        };

        match self.resolve_pending_use_case.execute(params).await {
            Ok(resolution) => ResolvePendingResponse::Ok(Json(resolution.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ResolvePendingResponse::NotFound(json),
                    409 => ResolvePendingResponse::Conflict(json),
                    _ => ResolvePendingResponse::InternalError(json),
                }
            }
        }
    }

    /// Add an entry to the shopping list
    ///
    /// Skips the swap check. Used to accept suggestions. `added` is false when
    /// the name is already listed.
    #[oai(
        path = "/sessions/:id/shopping-list",
        method = "post",
        tag = "ApiTags::ShoppingList"
    )]
    async fn add(&self, id: Path<String>, body: Json<NewItemRequest>) -> AddToListApiResponse {
        let item = match body.0.into_props(Utc::now(), &self.policy) {
            Ok(item) => item,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return AddToListApiResponse::BadRequest(json);
            }
        };
        let params = AddToListParams {
            session_id: id.0.into(),
            item,
        };

        match self.add_use_case.execute(params).await {
            Ok(added) => AddToListApiResponse::Ok(Json(AddToListResponse { added })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddToListApiResponse::BadRequest(json),
                    404 => AddToListApiResponse::NotFound(json),
                    _ => AddToListApiResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a shopping list entry by position
    #[oai(
        path = "/sessions/:id/shopping-list/:index",
        method = "delete",
        tag = "ApiTags::ShoppingList"
    )]
    async fn remove(&self, id: Path<String>, index: Path<u32>) -> RemoveFromListResponse {
        let params = RemoveFromListParams {
            session_id: id.0.into(),
            index: index.0 as usize,
        };

        match self.remove_use_case.execute(params).await {
            Ok(entry) => RemoveFromListResponse::Ok(Json(entry.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveFromListResponse::NotFound(json),
                    _ => RemoveFromListResponse::InternalError(json),
                }
            }
        }
    }

    /// Check out the shopping list
    ///
    /// Moves every entry into the pantry and returns the stocked items.
    #[oai(
        path = "/sessions/:id/checkout",
        method = "post",
        tag = "ApiTags::ShoppingList"
    )]
    async fn checkout(&self, id: Path<String>) -> CheckoutResponse {
        let params = CheckoutParams {
            session_id: id.0.into(),
        };

        match self.checkout_use_case.execute(params).await {
            Ok(items) => {
                let now = Utc::now();
                let responses: Vec<InventoryItemResponse> = items
                    .into_iter()
                    .map(|item| InventoryItemResponse::from_item(item, now))
                    .collect();
                CheckoutResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => CheckoutResponse::NotFound(json),
                    _ => CheckoutResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SubmitItemResponse {
    #[oai(status = 200)]
    Ok(Json<SubmitItemResponseBody>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ResolvePendingResponse {
    #[oai(status = 200)]
    Ok(Json<ResolutionResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddToListApiResponse {
    #[oai(status = 200)]
    Ok(Json<AddToListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveFromListResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingListEntryResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CheckoutResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<InventoryItemResponse>>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
