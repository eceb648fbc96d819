use async_trait::async_trait;

use crate::domain::image::errors::ImageError;

pub struct FetchImageParams {
    pub locator: String,
}

#[async_trait]
pub trait FetchImageUseCase: Send + Sync {
    async fn execute(&self, params: FetchImageParams) -> Result<String, ImageError>;
}
