use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;

use super::errors::CartError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: Uuid,
    pub quantity: u32,
}

/// A user's cart. One cart per user; line items reference products by id
/// only, prices are resolved when the order is placed.
#[derive(Debug, Clone)]
pub struct Cart {
    pub id: Uuid,
    pub user_id: UserId,
    pub items: Vec<CartItem>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    pub fn empty(user_id: UserId) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            items: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    /// Adds a line item, merging quantities when the product is already
    /// in the cart.
    pub fn add_item(&mut self, product_id: Uuid, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::QuantityZero);
        }
        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) => item.quantity += quantity,
            None => self.items.push(CartItem {
                product_id,
                quantity,
            }),
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn remove_item(&mut self, product_id: Uuid) -> Result<(), CartError> {
        let before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        if self.items.len() == before {
            return Err(CartError::ItemNotFound);
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.updated_at = Utc::now();
    }

    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        items: Vec<CartItem>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            items,
            updated_at,
        }
    }
}
