use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use business::domain::image::errors::ImageError;
use business::domain::image::fetcher::{ImageStore, ImageUpload};
use business::domain::image::locator::StorageNamespace;

use crate::client::StorageClient;

/// Pushes product images into the store under a collision-free key and
/// hands back the public locator persisted on the product.
pub struct StorageImageUploader {
    client: Arc<StorageClient>,
    namespace: StorageNamespace,
}

impl StorageImageUploader {
    pub fn new(client: Arc<StorageClient>, namespace: StorageNamespace) -> Self {
        Self { client, namespace }
    }
}

#[async_trait]
impl ImageStore for StorageImageUploader {
    async fn store(&self, upload: ImageUpload) -> Result<String, ImageError> {
        let key = object_key(upload.file_name.as_deref());
        self.client
            .put_object(&key, upload.content_type.as_deref(), upload.bytes)
            .await?;

        let locator = self.namespace.locator_for(&key);
        tracing::info!("Stored image at {}", locator);
        Ok(locator)
    }
}

fn object_key(file_name: Option<&str>) -> String {
    format!("products/{}-{}", Uuid::new_v4(), sanitize(file_name.unwrap_or("image")))
}

/// Keeps the original name readable in the key while stripping anything
/// that could escape the object path.
fn sanitize(file_name: &str) -> String {
    let cleaned: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = cleaned.trim_matches('.');
    if trimmed.is_empty() {
        "image".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_safe_file_name_characters() {
        assert_eq!(sanitize("trail-runner_2.png"), "trail-runner_2.png");
    }

    #[test]
    fn should_replace_path_separators() {
        assert_eq!(sanitize("../../etc/passwd"), "_.._etc_passwd");
    }

    #[test]
    fn should_fall_back_for_empty_names() {
        assert_eq!(sanitize(""), "image");
        assert_eq!(sanitize("..."), "image");
    }

    #[test]
    fn should_prefix_keys_with_products_folder() {
        let key = object_key(Some("a.png"));
        assert!(key.starts_with("products/"));
        assert!(key.ends_with("-a.png"));
    }
}
