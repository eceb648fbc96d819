use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_all::{GetOrdersParams, GetOrdersUseCase};

pub struct GetOrdersUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOrdersUseCase for GetOrdersUseCaseImpl {
    async fn execute(&self, params: GetOrdersParams) -> Result<Vec<Order>, OrderError> {
        let orders = self.repository.find_all_for_user(params.user_id).await?;
        self.logger.debug(&format!(
            "Found {} order(s) for {}",
            orders.len(),
            params.user_id
        ));
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::order::model::OrderLine;
    use crate::domain::order::value_objects::OrderStatus;
    use crate::domain::shared::value_objects::UserId;
    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub OrderRepo {}

        #[async_trait]
        impl OrderRepository for OrderRepo {
            async fn save(&self, order: &Order) -> Result<(), RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
            async fn find_all_for_user(&self, user_id: UserId) -> Result<Vec<Order>, RepositoryError>;
            async fn find_all(&self) -> Result<Vec<Order>, RepositoryError>;
            async fn update_status(&self, id: Uuid, status: OrderStatus) -> Result<(), RepositoryError>;
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

    fn stored_order(id: Uuid, user_id: UserId) -> Order {
        Order::from_repository(
            id,
            user_id,
            vec![OrderLine {
                product_id: Uuid::new_v4(),
                name: "Trail Runner GTX".to_string(),
                price: BigDecimal::from(129),
                quantity: 1,
            }],
            BigDecimal::from(129),
            OrderStatus::Pending,
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn should_return_orders_for_the_user() {
        let user_id = UserId::new(Uuid::new_v4());
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_find_all_for_user()
            .returning(|user_id| Ok(vec![stored_order(Uuid::new_v4(), user_id)]));

        let use_case = GetOrdersUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let orders = use_case.execute(GetOrdersParams { user_id }).await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].user_id, user_id);
    }
}
