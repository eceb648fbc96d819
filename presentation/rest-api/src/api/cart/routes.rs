use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::remove_item::{
    RemoveCartItemParams, RemoveCartItemUseCase,
};

use crate::api::cart::dto::{AddCartItemRequest, CartResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::BearerAuth;
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_item_use_case,
            remove_item_use_case,
            clear_use_case,
        }
    }
}

/// Cart API, scoped to the authenticated user
#[OpenApi]
impl CartApi {
    /// Get the caller's cart
    #[oai(path = "/api/cart", method = "get", tag = "ApiTags::Carts")]
    async fn get_cart(&self, auth: BearerAuth) -> GetCartResponse {
        match self
            .get_use_case
            .execute(GetCartParams {
                user_id: auth.0.user_id,
            })
            .await
        {
            Ok(cart) => GetCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetCartResponse::InternalError(json)
            }
        }
    }

    /// Add an item to the caller's cart
    ///
    /// Quantities for a product already in the cart are merged.
    #[oai(path = "/api/cart/items", method = "post", tag = "ApiTags::Carts")]
    async fn add_item(&self, auth: BearerAuth, body: Json<AddCartItemRequest>) -> AddItemResponse {
        let product_id = match Uuid::parse_str(&body.0.product_id) {
            Ok(uuid) => uuid,
            Err(_) => {
                return AddItemResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "cart.invalid_product_id".to_string(),
                }));
            }
        };

        match self
            .add_item_use_case
            .execute(AddCartItemParams {
                user_id: auth.0.user_id,
                product_id,
                quantity: body.0.quantity,
            })
            .await
        {
            Ok(cart) => AddItemResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddItemResponse::BadRequest(json),
                    404 => AddItemResponse::NotFound(json),
                    _ => AddItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove an item from the caller's cart
    #[oai(
        path = "/api/cart/items/:product_id",
        method = "delete",
        tag = "ApiTags::Carts"
    )]
    async fn remove_item(&self, auth: BearerAuth, product_id: Path<String>) -> RemoveItemResponse {
        let product_id = match Uuid::parse_str(&product_id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return RemoveItemResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "cart.invalid_product_id".to_string(),
                }));
            }
        };

        match self
            .remove_item_use_case
            .execute(RemoveCartItemParams {
                user_id: auth.0.user_id,
                product_id,
            })
            .await
        {
            Ok(cart) => RemoveItemResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveItemResponse::NotFound(json),
                    _ => RemoveItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Empty the caller's cart
    #[oai(path = "/api/cart", method = "delete", tag = "ApiTags::Carts")]
    async fn clear_cart(&self, auth: BearerAuth) -> ClearCartResponse {
        match self
            .clear_use_case
            .execute(ClearCartParams {
                user_id: auth.0.user_id,
            })
            .await
        {
            Ok(()) => ClearCartResponse::NoContent,
            Err(err) => {
                let (_, json) = err.into_error_response();
                ClearCartResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddItemResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveItemResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearCartResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
