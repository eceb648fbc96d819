use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::repository::CartRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{Order, OrderLine};
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};
use crate::domain::product::repository::ProductRepository;

/// Turns the caller's cart into an order. Product name and price are
/// snapshotted into the order lines at this moment; the cart is cleared
/// once the order is stored.
pub struct PlaceOrderUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub cart_repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, params: PlaceOrderParams) -> Result<Order, OrderError> {
        let mut cart = self
            .cart_repository
            .find_by_user(params.user_id)
            .await
            .map_err(OrderError::Repository)?
            .ok_or(OrderError::CartEmpty)?;

        if cart.items.is_empty() {
            return Err(OrderError::CartEmpty);
        }

        let mut lines = Vec::with_capacity(cart.items.len());
        for item in &cart.items {
            let product = match self.product_repository.get_by_id(item.product_id).await {
                Ok(product) => product,
                Err(RepositoryError::NotFound) => return Err(OrderError::ProductUnavailable),
                Err(err) => return Err(err.into()),
            };
            lines.push(OrderLine {
                product_id: product.id,
                name: product.name,
                price: product.price,
                quantity: item.quantity,
            });
        }

        let order = Order::place(params.user_id, lines)?;
        self.repository.save(&order).await?;

        cart.clear();
        self.cart_repository
            .save(&cart)
            .await
            .map_err(OrderError::Repository)?;

        self.logger.info(&format!(
            "Order {} placed for {} (total {})",
            order.id, order.user_id, order.total
        ));
        Ok(order)
    }
}
