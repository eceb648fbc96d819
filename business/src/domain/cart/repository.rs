use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Cart;

#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Cart>, RepositoryError>;
    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
}
