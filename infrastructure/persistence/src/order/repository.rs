use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::order::model::Order;
use business::domain::order::repository::OrderRepository;
use business::domain::order::value_objects::OrderStatus;
use business::domain::shared::value_objects::UserId;

use super::entity::OrderEntity;

const ORDER_COLUMNS: &str = "id, user_id, items, total, status, created_at";

pub struct OrderRepositoryPostgres {
    pool: PgPool,
}

impl OrderRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn save(&self, order: &Order) -> Result<(), RepositoryError> {
        let items =
            serde_json::to_value(&order.items).map_err(|_| RepositoryError::DatabaseError)?;

        sqlx::query(
            r#"INSERT INTO orders (id, user_id, items, total, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)"#,
        )
        .bind(order.id)
        .bind(order.user_id.as_uuid())
        .bind(items)
        .bind(&order.total)
        .bind(order.status.to_string())
        .bind(order.created_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError> {
        let query = format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1");
        let entity = sqlx::query_as::<_, OrderEntity>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn find_all_for_user(&self, user_id: UserId) -> Result<Vec<Order>, RepositoryError> {
        let query = format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE user_id = $1 ORDER BY created_at DESC"
        );
        let entities = sqlx::query_as::<_, OrderEntity>(&query)
            .bind(user_id.as_uuid())
            .fetch_all(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let query = format!("SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC");
        let entities = sqlx::query_as::<_, OrderEntity>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn update_status(&self, id: Uuid, status: OrderStatus) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE orders SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status.to_string())
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
