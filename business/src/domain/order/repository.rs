use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Order;
use super::value_objects::OrderStatus;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn save(&self, order: &Order) -> Result<(), RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
    async fn find_all_for_user(&self, user_id: UserId) -> Result<Vec<Order>, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError>;
    async fn update_status(&self, id: Uuid, status: OrderStatus) -> Result<(), RepositoryError>;
}
