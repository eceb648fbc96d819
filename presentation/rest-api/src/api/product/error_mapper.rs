use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.name_empty",
            ),
            ProductError::PriceNegative => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.price_negative",
            ),
            ProductError::StockNegative => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.stock_negative",
            ),
            ProductError::ImagesEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.images_empty",
            ),
            ProductError::InvalidPage => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.invalid_page",
            ),
            ProductError::InvalidPageSize => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.invalid_page_size",
            ),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "product.not_found"),
            ProductError::ImageUploadFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "StorageError",
                "product.image_upload_failed",
            ),
            ProductError::Repository(_) => (
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
