use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::image::fetcher::ImageUpload;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct CreateProductParams {
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub stock: i32,
    pub category: String,
    pub brand: String,
    pub images: Vec<ImageUpload>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
