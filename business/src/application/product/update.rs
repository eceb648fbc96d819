use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductUpdateProps};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        let mut product = match self.repository.get_by_id(params.id).await {
            Ok(product) => product,
            Err(RepositoryError::NotFound) => return Err(ProductError::NotFound),
            Err(err) => return Err(err.into()),
        };

        product.apply_update(ProductUpdateProps {
            name: params.name,
            description: params.description,
            price: params.price,
            stock: params.stock,
            category: params.category,
            brand: params.brand,
        })?;

        self.repository.save(&product).await?;

        self.logger
            .info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}
