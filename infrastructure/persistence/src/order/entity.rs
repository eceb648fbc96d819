use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::order::model::{Order, OrderLine};
use business::domain::order::value_objects::OrderStatus;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct OrderEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub items: serde_json::Value,
    pub total: BigDecimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl OrderEntity {
    pub fn into_domain(self) -> Order {
        let items: Vec<OrderLine> = serde_json::from_value(self.items).unwrap_or_default();
        Order::from_repository(
            self.id,
            UserId::new(self.user_id),
            items,
            self.total,
            self.status
                .parse::<OrderStatus>()
                .unwrap_or(OrderStatus::Pending),
            self.created_at,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fall_back_to_pending_for_unknown_status() {
        let entity = OrderEntity {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            items: serde_json::json!([]),
            total: BigDecimal::from(0),
            status: "archived".to_string(),
            created_at: Utc::now(),
        };

        assert_eq!(entity.into_domain().status, OrderStatus::Pending);
    }
}
