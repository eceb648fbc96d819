use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::CartEntity;

pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Cart>, RepositoryError> {
        let entity = sqlx::query_as::<_, CartEntity>(
            "SELECT id, user_id, items, updated_at FROM carts WHERE user_id = $1",
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let items =
            serde_json::to_value(&cart.items).map_err(|_| RepositoryError::DatabaseError)?;

        sqlx::query(
            r#"INSERT INTO carts (id, user_id, items, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id) DO UPDATE SET
                items = EXCLUDED.items,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(cart.id)
        .bind(cart.user_id.as_uuid())
        .bind(items)
        .bind(cart.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
