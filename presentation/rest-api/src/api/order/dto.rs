use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::order::model::{Order, OrderLine};
use business::domain::order::value_objects::OrderStatus;

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum OrderStatusDto {
    #[oai(rename = "pending")]
    Pending,
    #[oai(rename = "shipped")]
    Shipped,
    #[oai(rename = "delivered")]
    Delivered,
    #[oai(rename = "cancelled")]
    Cancelled,
}

impl From<OrderStatus> for OrderStatusDto {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Pending => OrderStatusDto::Pending,
            OrderStatus::Shipped => OrderStatusDto::Shipped,
            OrderStatus::Delivered => OrderStatusDto::Delivered,
            OrderStatus::Cancelled => OrderStatusDto::Cancelled,
        }
    }
}

impl From<OrderStatusDto> for OrderStatus {
    fn from(dto: OrderStatusDto) -> Self {
        match dto {
            OrderStatusDto::Pending => OrderStatus::Pending,
            OrderStatusDto::Shipped => OrderStatus::Shipped,
            OrderStatusDto::Delivered => OrderStatus::Delivered,
            OrderStatusDto::Cancelled => OrderStatus::Cancelled,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
pub struct OrderLineDto {
    pub product_id: String,
    /// Product name at placement time
    pub name: String,
    /// Unit price at placement time, as a decimal string
    pub price: String,
    pub quantity: u32,
}

impl From<OrderLine> for OrderLineDto {
    fn from(line: OrderLine) -> Self {
        Self {
            product_id: line.product_id.to_string(),
            name: line.name,
            price: line.price.to_string(),
            quantity: line.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: String,
    pub user_id: String,
    pub items: Vec<OrderLineDto>,
    /// Order total as a decimal string
    pub total: String,
    pub status: OrderStatusDto,
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.to_string(),
            user_id: order.user_id.to_string(),
            items: order.items.into_iter().map(|l| l.into()).collect(),
            total: order.total.to_string(),
            status: order.status.into(),
            created_at: order.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UpdateOrderStatusRequest {
    /// New order status
    pub status: OrderStatusDto,
}
