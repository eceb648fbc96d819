#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.price_negative")]
    PriceNegative,
    #[error("product.stock_negative")]
    StockNegative,
    #[error("product.images_empty")]
    ImagesEmpty,
    #[error("product.invalid_page")]
    InvalidPage,
    #[error("product.invalid_page_size")]
    InvalidPageSize,
    #[error("product.not_found")]
    NotFound,
    #[error("product.image_upload_failed")]
    ImageUploadFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
