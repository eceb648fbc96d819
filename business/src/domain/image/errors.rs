#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("image.locator_missing")]
    LocatorMissing,
    #[error("image.locator_outside_store")]
    ForeignLocator,
    #[error("image.malformed_payload")]
    MalformedPayload,
    #[error("image.storage_auth_failed")]
    AuthFailed,
    #[error("image.fetch_failed")]
    FetchFailed,
    #[error("image.upload_failed")]
    UploadFailed,
}
