use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::order::use_cases::get_all::{GetOrdersParams, GetOrdersUseCase};
use business::domain::order::use_cases::get_by_id::{GetOrderByIdParams, GetOrderByIdUseCase};
use business::domain::order::use_cases::list_all::ListAllOrdersUseCase;
use business::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};
use business::domain::order::use_cases::update_status::{
    UpdateOrderStatusParams, UpdateOrderStatusUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::{OrderResponse, UpdateOrderStatusRequest};
use crate::api::security::BearerAuth;
use crate::api::tags::ApiTags;

pub struct OrderApi {
    place_use_case: Arc<dyn PlaceOrderUseCase>,
    get_all_use_case: Arc<dyn GetOrdersUseCase>,
    get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
    update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
    list_all_use_case: Arc<dyn ListAllOrdersUseCase>,
}

impl OrderApi {
    pub fn new(
        place_use_case: Arc<dyn PlaceOrderUseCase>,
        get_all_use_case: Arc<dyn GetOrdersUseCase>,
        get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
        update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
        list_all_use_case: Arc<dyn ListAllOrdersUseCase>,
    ) -> Self {
        Self {
            place_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_status_use_case,
            list_all_use_case,
        }
    }
}

fn invalid_id() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: "order.invalid_id".to_string(),
    })
}

fn admin_required() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "Forbidden".to_string(),
        message: "auth.admin_required".to_string(),
    })
}

/// Order API
///
/// Customers place and read their own orders; status changes and the
/// cross-customer listing are admin only.
#[OpenApi]
impl OrderApi {
    /// Place an order from the caller's cart
    ///
    /// Snapshots current product names and prices into the order and
    /// clears the cart.
    #[oai(path = "/api/orders", method = "post", tag = "ApiTags::Orders")]
    async fn place_order(&self, auth: BearerAuth) -> PlaceOrderResponse {
        match self
            .place_use_case
            .execute(PlaceOrderParams {
                user_id: auth.0.user_id,
            })
            .await
        {
            Ok(order) => PlaceOrderResponse::Created(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => PlaceOrderResponse::BadRequest(json),
                    _ => PlaceOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// List the caller's orders
    #[oai(path = "/api/orders", method = "get", tag = "ApiTags::Orders")]
    async fn get_orders(&self, auth: BearerAuth) -> GetOrdersResponse {
        match self
            .get_all_use_case
            .execute(GetOrdersParams {
                user_id: auth.0.user_id,
            })
            .await
        {
            Ok(orders) => {
                let responses: Vec<OrderResponse> = orders.into_iter().map(|o| o.into()).collect();
                GetOrdersResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetOrdersResponse::InternalError(json)
            }
        }
    }

    /// Get an order by ID
    ///
    /// Owners see their own orders; admins see any order.
    #[oai(path = "/api/orders/:id", method = "get", tag = "ApiTags::Orders")]
    async fn get_order_by_id(&self, auth: BearerAuth, id: Path<String>) -> GetOrderByIdResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return GetOrderByIdResponse::BadRequest(invalid_id()),
        };

        match self
            .get_by_id_use_case
            .execute(GetOrderByIdParams {
                id: uuid,
                requester: auth.0.user_id,
                requester_is_admin: auth.0.is_admin,
            })
            .await
        {
            Ok(order) => GetOrderByIdResponse::Ok(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => GetOrderByIdResponse::Forbidden(json),
                    404 => GetOrderByIdResponse::NotFound(json),
                    _ => GetOrderByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// List all orders
    ///
    /// Admin only.
    #[oai(path = "/api/admin/orders", method = "get", tag = "ApiTags::Orders")]
    async fn list_all_orders(&self, auth: BearerAuth) -> ListAllOrdersResponse {
        if !auth.0.is_admin {
            return ListAllOrdersResponse::Forbidden(admin_required());
        }

        match self.list_all_use_case.execute().await {
            Ok(orders) => {
                let responses: Vec<OrderResponse> = orders.into_iter().map(|o| o.into()).collect();
                ListAllOrdersResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                ListAllOrdersResponse::InternalError(json)
            }
        }
    }

    /// Update an order's status
    ///
    /// Admin only.
    #[oai(path = "/api/orders/:id/status", method = "put", tag = "ApiTags::Orders")]
    async fn update_status(
        &self,
        auth: BearerAuth,
        id: Path<String>,
        body: Json<UpdateOrderStatusRequest>,
    ) -> UpdateOrderStatusResponse {
        if !auth.0.is_admin {
            return UpdateOrderStatusResponse::Forbidden(admin_required());
        }

        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return UpdateOrderStatusResponse::BadRequest(invalid_id()),
        };

        match self
            .update_status_use_case
            .execute(UpdateOrderStatusParams {
                id: uuid,
                status: body.0.status.into(),
            })
            .await
        {
            Ok(order) => UpdateOrderStatusResponse::Ok(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateOrderStatusResponse::NotFound(json),
                    _ => UpdateOrderStatusResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum PlaceOrderResponse {
    #[oai(status = 201)]
    Created(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrderByIdResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListAllOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateOrderStatusResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
