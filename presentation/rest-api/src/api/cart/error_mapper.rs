use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CartError::QuantityZero => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "cart.quantity_zero",
            ),
            CartError::ItemNotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "cart.item_not_found")
            }
            CartError::ProductNotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "cart.product_not_found")
            }
            CartError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
