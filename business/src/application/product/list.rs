use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::list::{ListProductsParams, ListProductsUseCase};
use crate::domain::product::value_objects::CatalogPage;

/// Serves one page of the catalog. A page beyond the available range is
/// not an error; it comes back as an empty slice with the real total.
pub struct ListProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self, params: ListProductsParams) -> Result<CatalogPage, ProductError> {
        let (items, total) = self
            .repository
            .find_page(
                params.request.offset(),
                params.request.page_size(),
                &params.filter,
            )
            .await?;

        self.logger.debug(&format!(
            "Catalog page {} served with {} of {} product(s)",
            params.request.page(),
            items.len(),
            total
        ));

        Ok(CatalogPage::assemble(items, total, params.request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::Product;
    use crate::domain::product::value_objects::{PageRequest, ProductFilter};
    use bigdecimal::BigDecimal;
    use chrono::Utc;
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

    fn product(name: &str) -> Product {
        let now = Utc::now();
        Product::from_repository(
            Uuid::new_v4(),
            name.to_string(),
            "".to_string(),
            BigDecimal::from(10),
            5,
            "shoes".to_string(),
            "Vertex".to_string(),
            vec!["https://cdn.example.com/assets/p.png".to_string()],
            now,
            now,
        )
    }

    #[tokio::test]
    async fn should_derive_total_pages_from_total_and_size() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_page()
            .withf(|offset, limit, _| *offset == 10 && *limit == 10)
            .returning(|_, _, _| Ok((vec![product("A"), product("B")], 23)));

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let page = use_case
            .execute(ListProductsParams {
                request: PageRequest::new(2, 10).unwrap(),
                filter: ProductFilter::default(),
            })
            .await
            .unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 23);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 3);
    }

    #[tokio::test]
    async fn should_report_one_page_for_empty_catalog() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_page()
            .returning(|_, _, _| Ok((vec![], 0)));

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let page = use_case
            .execute(ListProductsParams {
                request: PageRequest::new(1, 10).unwrap(),
                filter: ProductFilter::default(),
            })
            .await
            .unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn should_return_empty_slice_for_page_beyond_range() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_page()
            .withf(|offset, _, _| *offset == 90)
            .returning(|_, _, _| Ok((vec![], 7)));

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let page = use_case
            .execute(ListProductsParams {
                request: PageRequest::new(10, 10).unwrap(),
                filter: ProductFilter::default(),
            })
            .await
            .unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total, 7);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn should_pass_search_filter_to_repository() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_page()
            .withf(|_, _, filter| filter.search.as_deref() == Some("runner"))
            .returning(|_, _, _| Ok((vec![product("Trail Runner GTX")], 1)));

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let page = use_case
            .execute(ListProductsParams {
                request: PageRequest::new(1, 10).unwrap(),
                filter: ProductFilter {
                    search: Some("runner".to_string()),
                    category: None,
                },
            })
            .await
            .unwrap();

        assert_eq!(page.items.len(), 1);
    }
}
