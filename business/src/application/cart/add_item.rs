use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

/// Adds a product to the caller's cart, creating the cart on first use.
/// The product must exist in the catalog at the time of the add; carts
/// only store the reference.
pub struct AddCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<Cart, CartError> {
        match self.product_repository.get_by_id(params.product_id).await {
            Ok(_) => {}
            Err(RepositoryError::NotFound) => return Err(CartError::ProductNotFound),
            Err(err) => return Err(err.into()),
        }

        let mut cart = self
            .repository
            .find_by_user(params.user_id)
            .await?
            .unwrap_or_else(|| Cart::empty(params.user_id));

        cart.add_item(params.product_id, params.quantity)?;
        self.repository.save(&cart).await?;

        self.logger.info(&format!(
            "Cart {} now holds {} line(s)",
            cart.id,
            cart.items.len()
        ));
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::Product;
    use crate::domain::product::value_objects::ProductFilter;
    use crate::domain::shared::value_objects::UserId;
    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn find_by_user(&self, user_id: UserId) -> Result<Option<Cart>, RepositoryError>;
            async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
        }
    }

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

    fn existing_product() -> MockProductRepo {
        let mut mock = MockProductRepo::new();
        mock.expect_get_by_id().returning(|id| {
            let now = Utc::now();
            Ok(Product::from_repository(
                id,
                "Trail Runner GTX".to_string(),
                "".to_string(),
                BigDecimal::from(129),
                25,
                "shoes".to_string(),
                "Vertex".to_string(),
                vec!["https://cdn.example.com/assets/p.png".to_string()],
                now,
                now,
            ))
        });
        mock
    }

    #[tokio::test]
    async fn should_create_cart_on_first_add() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_find_by_user().returning(|_| Ok(None));
        mock_repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            product_repository: Arc::new(existing_product()),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(AddCartItemParams {
                user_id: UserId::new(Uuid::new_v4()),
                product_id: Uuid::new_v4(),
                quantity: 2,
            })
            .await
            .unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
    }

    #[tokio::test]
    async fn should_reject_unknown_product_without_touching_cart() {
        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_find_by_user().times(0);
        mock_repo.expect_save().times(0);

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            product_repository: Arc::new(product_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams {
                user_id: UserId::new(Uuid::new_v4()),
                product_id: Uuid::new_v4(),
                quantity: 1,
            })
            .await;

        assert!(matches!(result, Err(CartError::ProductNotFound)));
    }

    #[tokio::test]
    async fn should_reject_zero_quantity_without_saving() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_find_by_user().returning(|_| Ok(None));
        mock_repo.expect_save().times(0);

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            product_repository: Arc::new(existing_product()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams {
                user_id: UserId::new(Uuid::new_v4()),
                product_id: Uuid::new_v4(),
                quantity: 0,
            })
            .await;

        assert!(matches!(result, Err(CartError::QuantityZero)));
    }
}
