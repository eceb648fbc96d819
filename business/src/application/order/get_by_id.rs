use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_by_id::{GetOrderByIdParams, GetOrderByIdUseCase};

/// Owners see their own orders; admins see any order.
pub struct GetOrderByIdUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOrderByIdUseCase for GetOrderByIdUseCaseImpl {
    async fn execute(&self, params: GetOrderByIdParams) -> Result<Order, OrderError> {
        let order = match self.repository.get_by_id(params.id).await {
            Ok(order) => order,
            Err(RepositoryError::NotFound) => return Err(OrderError::NotFound),
            Err(err) => return Err(err.into()),
        };

        if !params.requester_is_admin && order.user_id != params.requester {
            return Err(OrderError::Forbidden);
        }
        Ok(order)
    }
}
