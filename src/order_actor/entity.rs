//! Entity trait implementation for [`Order`].
//!
//! The store's context is the [`OrderLifecycle`], so every status change made
//! through the store goes through the state machine. Orders have no free-form
//! update: `Update` is uninhabited.

use crate::framework::Entity;
use crate::lifecycle::{Action, OrderLifecycle};
use crate::model::{Order, OrderCreate, OrderId};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl Entity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = Infallible;
    type Action = Action;
    type ActionResult = Order;
    type Context = OrderLifecycle;
    type Error = OrderError;

    /// Creates an `InProgress` order. Blank descriptions are rejected.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        let description = params.description.trim();
        if description.is_empty() {
            return Err(OrderError::Validation(
                "description must not be blank".to_string(),
            ));
        }
        Ok(Order::new(id, description))
    }

    async fn on_update(
        &mut self,
        update: Infallible,
        _lifecycle: &OrderLifecycle,
    ) -> Result<(), OrderError> {
        match update {}
    }

    /// Applies a lifecycle transition and returns the updated order.
    async fn handle_action(
        &mut self,
        action: Action,
        lifecycle: &OrderLifecycle,
    ) -> Result<Order, OrderError> {
        *self = lifecycle.attempt_transition(self, action)?;
        Ok(self.clone())
    }
}
