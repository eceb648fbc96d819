#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.quantity_zero")]
    QuantityZero,
    #[error("cart.item_not_found")]
    ItemNotFound,
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
