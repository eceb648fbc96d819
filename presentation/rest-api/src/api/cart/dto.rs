use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::cart::model::{Cart, CartItem};

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartItemDto {
    pub product_id: String,
    pub quantity: u32,
}

impl From<CartItem> for CartItemDto {
    fn from(item: CartItem) -> Self {
        Self {
            product_id: item.product_id.to_string(),
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartResponse {
    pub id: String,
    pub user_id: String,
    pub items: Vec<CartItemDto>,
    pub updated_at: DateTime<Utc>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            id: cart.id.to_string(),
            user_id: cart.user_id.to_string(),
            items: cart.items.into_iter().map(|i| i.into()).collect(),
            updated_at: cart.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AddCartItemRequest {
    /// Product to add
    pub product_id: String,
    /// Units to add (must be at least 1)
    pub quantity: u32,
}
