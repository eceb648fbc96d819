use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use business::domain::image::errors::ImageError;
use business::domain::image::fetcher::RemoteImageFetcher;
use business::domain::image::locator::StorageNamespace;
use business::domain::image::payload::encode_inline_image;

use crate::client::StorageClient;

/// Downloads objects from the storage API, buffering each one through a
/// uniquely named scratch file before encoding it inline. The scratch
/// file is removed when the guard drops, on success and on failure alike.
pub struct StorageImageFetcher {
    client: Arc<StorageClient>,
    namespace: StorageNamespace,
    scratch_dir: PathBuf,
}

impl StorageImageFetcher {
    pub fn new(client: Arc<StorageClient>, namespace: StorageNamespace, scratch_dir: PathBuf) -> Self {
        Self {
            client,
            namespace,
            scratch_dir,
        }
    }
}

#[async_trait]
impl RemoteImageFetcher for StorageImageFetcher {
    async fn fetch(&self, locator: &str) -> Result<String, ImageError> {
        let object_path = self
            .namespace
            .object_path(locator)
            .ok_or(ImageError::ForeignLocator)?;

        let mut response = self.client.get_object(&object_path).await?;

        let scratch = tempfile::Builder::new()
            .prefix("img-")
            .tempfile_in(&self.scratch_dir)
            .map_err(|err| {
                tracing::error!("Failed to create scratch file: {}", err);
                ImageError::FetchFailed
            })?;

        let mut file = scratch.as_file();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|_| ImageError::FetchFailed)?
        {
            file.write_all(&chunk).map_err(|_| ImageError::FetchFailed)?;
        }
        file.flush().map_err(|_| ImageError::FetchFailed)?;

        let bytes = tokio::fs::read(scratch.path())
            .await
            .map_err(|_| ImageError::FetchFailed)?;

        tracing::debug!("Fetched {} byte(s) for {}", bytes.len(), locator);
        Ok(encode_inline_image(&bytes))
    }
}
