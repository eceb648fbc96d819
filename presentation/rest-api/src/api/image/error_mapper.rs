use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::image::errors::ImageError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ImageError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ImageError::LocatorMissing => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "image.locator_missing",
            ),
            ImageError::ForeignLocator => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "image.locator_outside_store",
            ),
            ImageError::MalformedPayload => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "image.malformed_payload",
            ),
            ImageError::AuthFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "FetchError",
                "image.storage_auth_failed",
            ),
            ImageError::FetchFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "FetchError",
                "image.fetch_failed",
            ),
            ImageError::UploadFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "StorageError",
                "image.upload_failed",
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
