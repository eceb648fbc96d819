#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.cart_empty")]
    CartEmpty,
    #[error("order.product_unavailable")]
    ProductUnavailable,
    #[error("order.not_found")]
    NotFound,
    #[error("order.forbidden")]
    Forbidden,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
