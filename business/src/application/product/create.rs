use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::image::fetcher::ImageStore;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

/// Uploads the attached images to the remote store, then persists the
/// product with the returned locators. A request without images is
/// rejected before anything is uploaded or written.
pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub image_store: Arc<dyn ImageStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        if params.images.is_empty() {
            return Err(ProductError::ImagesEmpty);
        }

        self.logger.info(&format!(
            "Creating product '{}' with {} image(s)",
            params.name,
            params.images.len()
        ));

        let mut image_urls = Vec::with_capacity(params.images.len());
        for upload in params.images {
            let locator = self
                .image_store
                .store(upload)
                .await
                .map_err(|_| ProductError::ImageUploadFailed)?;
            image_urls.push(locator);
        }

        let product = Product::new(NewProductProps {
            name: params.name,
            description: params.description,
            price: params.price,
            stock: params.stock,
            category: params.category,
            brand: params.brand,
            image_urls,
        })?;

        self.repository.save(&product).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::image::errors::ImageError;
    use crate::domain::image::fetcher::ImageUpload;
    use crate::domain::product::value_objects::ProductFilter;
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
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
    }

    mock! {
        pub Store {}

        #[async_trait]
        impl ImageStore for Store {
            async fn store(&self, upload: ImageUpload) -> Result<String, ImageError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn upload() -> ImageUpload {
        ImageUpload {
            file_name: Some("gtx.png".to_string()),
            content_type: Some("image/png".to_string()),
            bytes: vec![0x89, 0x50, 0x4e, 0x47],
        }
    }

    fn params(images: Vec<ImageUpload>) -> CreateProductParams {
        CreateProductParams {
            name: "Trail Runner GTX".to_string(),
            description: "Waterproof trail running shoe".to_string(),
            price: BigDecimal::from(129),
            stock: 25,
            category: "shoes".to_string(),
            brand: "Vertex".to_string(),
            images,
        }
    }

    #[tokio::test]
    async fn should_upload_images_then_save_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().times(1).returning(|_| Ok(()));
        let mut mock_store = MockStore::new();
        mock_store.expect_store().times(2).returning(|_| {
            Ok("https://cdn.example.com/assets/products/gtx.png".to_string())
        });

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            image_store: Arc::new(mock_store),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(params(vec![upload(), upload()]))
            .await
            .unwrap();

        assert_eq!(product.image_urls.len(), 2);
        assert_eq!(product.name, "Trail Runner GTX");
    }

    #[tokio::test]
    async fn should_reject_creation_without_images() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().times(0);
        let mut mock_store = MockStore::new();
        mock_store.expect_store().times(0);

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            image_store: Arc::new(mock_store),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(vec![])).await;

        assert!(matches!(result, Err(ProductError::ImagesEmpty)));
    }

    #[tokio::test]
    async fn should_not_save_product_when_an_upload_fails() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().times(0);
        let mut mock_store = MockStore::new();
        mock_store
            .expect_store()
            .times(1)
            .returning(|_| Err(ImageError::UploadFailed));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            image_store: Arc::new(mock_store),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(vec![upload()])).await;

        assert!(matches!(result, Err(ProductError::ImageUploadFailed)));
    }
}
