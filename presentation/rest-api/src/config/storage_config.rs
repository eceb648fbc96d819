use std::path::PathBuf;

/// Configuration for the object storage provider.
pub struct StorageConfig {
    pub api_url: String,
    pub public_base_url: String,
    pub bucket: String,
    pub access_key: String,
    pub access_secret: String,
    pub scratch_dir: PathBuf,
}

impl StorageConfig {
    /// Environment variables:
    /// - STORAGE_API_URL: Base URL of the storage API (required)
    /// - STORAGE_PUBLIC_URL: Public URL prefix image locators carry (required)
    /// - STORAGE_BUCKET: Bucket holding product images (required)
    /// - STORAGE_ACCESS_KEY / STORAGE_ACCESS_SECRET: Credentials (required)
    /// - STORAGE_SCRATCH_DIR: Download buffer directory (default: system temp)
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("STORAGE_API_URL").expect("STORAGE_API_URL must be set"),
            public_base_url: std::env::var("STORAGE_PUBLIC_URL")
                .expect("STORAGE_PUBLIC_URL must be set"),
            bucket: std::env::var("STORAGE_BUCKET").expect("STORAGE_BUCKET must be set"),
            access_key: std::env::var("STORAGE_ACCESS_KEY")
                .expect("STORAGE_ACCESS_KEY must be set"),
            access_secret: std::env::var("STORAGE_ACCESS_SECRET")
                .expect("STORAGE_ACCESS_SECRET must be set"),
            scratch_dir: std::env::var("STORAGE_SCRATCH_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| std::env::temp_dir()),
        }
    }
}
