use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::update_status::{
    UpdateOrderStatusParams, UpdateOrderStatusUseCase,
};

pub struct UpdateOrderStatusUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateOrderStatusUseCase for UpdateOrderStatusUseCaseImpl {
    async fn execute(&self, params: UpdateOrderStatusParams) -> Result<Order, OrderError> {
        match self.repository.update_status(params.id, params.status).await {
            Ok(()) => {}
            Err(RepositoryError::NotFound) => return Err(OrderError::NotFound),
            Err(err) => return Err(err.into()),
        }

        self.logger.info(&format!(
            "Order {} moved to status {}",
            params.id, params.status
        ));
        Ok(self.repository.get_by_id(params.id).await?)
    }
}
