use async_trait::async_trait;

use super::errors::ImageError;

/// An image received from a client, on its way to the remote store.
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Downloads a remote object and returns it as an inline payload.
/// Implementations authenticate to the storage provider, buffer the
/// download through scratch storage, and clean up after themselves on
/// every path.
#[async_trait]
pub trait RemoteImageFetcher: Send + Sync {
    async fn fetch(&self, locator: &str) -> Result<String, ImageError>;
}

/// Uploads image bytes to the remote store, returning the public locator
/// the object is reachable under.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn store(&self, upload: ImageUpload) -> Result<String, ImageError>;
}
