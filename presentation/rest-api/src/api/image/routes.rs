use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::image::use_cases::fetch_image::{FetchImageParams, FetchImageUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::image::dto::ImageDataResponse;
use crate::api::tags::ApiTags;

pub struct ImageApi {
    fetch_use_case: Arc<dyn FetchImageUseCase>,
}

impl ImageApi {
    pub fn new(fetch_use_case: Arc<dyn FetchImageUseCase>) -> Self {
        Self { fetch_use_case }
    }
}

/// Image proxy API
///
/// Turns remote storage locators into inline payloads the browser can
/// render directly. Results are cached per locator for the lifetime of
/// the process, so a client only ever triggers one download per image.
#[OpenApi]
impl ImageApi {
    /// Fetch image data for a locator
    ///
    /// Returns the image as a self-contained inline payload. Locators
    /// outside the configured storage namespace are rejected without a
    /// network call.
    #[oai(path = "/api/image-data", method = "get", tag = "ApiTags::Images")]
    async fn image_data(&self, url: Query<Option<String>>) -> FetchImageResponse {
        let locator = match url.0 {
            Some(locator) if !locator.trim().is_empty() => locator,
            _ => {
                return FetchImageResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "image.locator_missing".to_string(),
                }));
            }
        };

        match self
            .fetch_use_case
            .execute(FetchImageParams { locator })
            .await
        {
            Ok(payload) => FetchImageResponse::Ok(Json(ImageDataResponse {
                success: true,
                image_data: payload,
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => FetchImageResponse::BadRequest(json),
                    _ => FetchImageResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum FetchImageResponse {
    #[oai(status = 200)]
    Ok(Json<ImageDataResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
