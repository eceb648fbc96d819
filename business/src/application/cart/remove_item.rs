use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::logger::Logger;

pub struct RemoveCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<Cart, CartError> {
        let mut cart = self
            .repository
            .find_by_user(params.user_id)
            .await?
            .ok_or(CartError::ItemNotFound)?;

        cart.remove_item(params.product_id)?;
        self.repository.save(&cart).await?;
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
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

    #[tokio::test]
    async fn should_remove_item_and_save() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_find_by_user().returning(move |user_id| {
            let mut cart = Cart::empty(user_id);
            cart.add_item(product_id, 1).unwrap();
            Ok(Some(cart))
        });
        mock_repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = RemoveCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(RemoveCartItemParams {
                user_id: UserId::new(Uuid::new_v4()),
                product_id,
            })
            .await
            .unwrap();
        assert!(cart.items.is_empty());
    }

    #[tokio::test]
    async fn should_fail_when_user_has_no_cart() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_find_by_user().returning(|_| Ok(None));
        mock_repo.expect_save().times(0);

        let use_case = RemoveCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveCartItemParams {
                user_id: UserId::new(Uuid::new_v4()),
                product_id: Uuid::new_v4(),
            })
            .await;
        assert!(matches!(result, Err(CartError::ItemNotFound)));
    }
}
