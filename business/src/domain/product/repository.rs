use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;
use super::value_objects::ProductFilter;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns one page of products plus the total count matching the
    /// filter. Ordering is newest first (creation timestamp, then id).
    async fn find_page(
        &self,
        offset: u64,
        limit: u32,
        filter: &ProductFilter,
    ) -> Result<(Vec<Product>, u64), RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
