use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use crate::domain::logger::Logger;

/// Clearing a cart that was never created is a no-op, not an error.
pub struct ClearCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self, params: ClearCartParams) -> Result<(), CartError> {
        if let Some(mut cart) = self.repository.find_by_user(params.user_id).await? {
            cart.clear();
            self.repository.save(&cart).await?;
            self.logger.info(&format!("Cart cleared: {}", cart.id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::Cart;
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
    async fn should_clear_and_save_existing_cart() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_find_by_user().returning(|user_id| {
            let mut cart = Cart::empty(user_id);
            cart.add_item(Uuid::new_v4(), 3).unwrap();
            Ok(Some(cart))
        });
        mock_repo
            .expect_save()
            .times(1)
            .withf(|cart| cart.items.is_empty())
            .returning(|_| Ok(()));

        let use_case = ClearCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert!(
            use_case
                .execute(ClearCartParams {
                    user_id: UserId::new(Uuid::new_v4()),
                })
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn should_ignore_missing_cart() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_find_by_user().returning(|_| Ok(None));
        mock_repo.expect_save().times(0);

        let use_case = ClearCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert!(
            use_case
                .execute(ClearCartParams {
                    user_id: UserId::new(Uuid::new_v4()),
                })
                .await
                .is_ok()
        );
    }
}
