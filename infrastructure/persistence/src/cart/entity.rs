use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::cart::model::{Cart, CartItem};
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct CartEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub items: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

impl CartEntity {
    /// A row with items that no longer deserialize is treated as an
    /// empty cart rather than a hard failure.
    pub fn into_domain(self) -> Cart {
        let items: Vec<CartItem> = match serde_json::from_value(self.items) {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!("Discarding unreadable cart items for {}: {}", self.id, err);
                Vec::new()
            }
        };
        Cart::from_repository(self.id, UserId::new(self.user_id), items, self.updated_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_row_into_domain_cart() {
        let entity = CartEntity {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            items: serde_json::json!([
                {"product_id": Uuid::nil(), "quantity": 2}
            ]),
            updated_at: Utc::now(),
        };

        let cart = entity.into_domain();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
    }

    #[test]
    fn should_treat_unreadable_items_as_empty_cart() {
        let entity = CartEntity {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            items: serde_json::json!({"legacy": true}),
            updated_at: Utc::now(),
        };

        assert!(entity.into_domain().items.is_empty());
    }
}
