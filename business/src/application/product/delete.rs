use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        match self.repository.delete(params.id).await {
            Ok(()) => {
                self.logger
                    .info(&format!("Product deleted: {}", params.id));
                Ok(())
            }
            Err(RepositoryError::NotFound) => Err(ProductError::NotFound),
            Err(err) => Err(err.into()),
        }
    }
}
