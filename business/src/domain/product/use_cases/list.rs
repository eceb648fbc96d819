use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::value_objects::{CatalogPage, PageRequest, ProductFilter};

pub struct ListProductsParams {
    pub request: PageRequest,
    pub filter: ProductFilter,
}

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self, params: ListProductsParams) -> Result<CatalogPage, ProductError>;
}
