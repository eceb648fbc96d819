use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;

use super::errors::OrderError;
use super::value_objects::OrderStatus;

/// A line item frozen at placement time. Name and price are snapshots so
/// later catalog edits leave placed orders untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    pub quantity: u32,
}

#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub user_id: UserId,
    pub items: Vec<OrderLine>,
    pub total: BigDecimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn place(user_id: UserId, items: Vec<OrderLine>) -> Result<Self, OrderError> {
        if items.is_empty() {
            return Err(OrderError::CartEmpty);
        }
        let total = items.iter().fold(BigDecimal::zero(), |acc, line| {
            acc + &line.price * BigDecimal::from(line.quantity)
        });
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            items,
            total,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        })
    }

    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        items: Vec<OrderLine>,
        total: BigDecimal,
        status: OrderStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            items,
            total,
            status,
            created_at,
        }
    }
}
