use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::list_all::ListAllOrdersUseCase;

pub struct ListAllOrdersUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListAllOrdersUseCase for ListAllOrdersUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Order>, OrderError> {
        let orders = self.repository.find_all().await?;
        self.logger
            .debug(&format!("Listing {} order(s)", orders.len()));
        Ok(orders)
    }
}
