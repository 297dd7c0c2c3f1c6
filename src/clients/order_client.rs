//! # Order Client
//!
//! High-level API over the order store. Transitions are sent to the store as
//! actions so the state machine runs inside the store actor, one request at a
//! time per store.
use crate::framework::{ResourceClient, ResourceHandle, StoreError};
use crate::lifecycle::Action;
use crate::model::{Order, OrderCreate, OrderId};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the order store.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Creates an order in progress and returns it as stored.
    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!("create_order called");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(%id, "Order created");
        self.find(id).await
    }

    /// Fetches an order, treating absence as an error.
    pub async fn find(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id).await?.ok_or(OrderError::NotFound(id))
    }

    pub async fn complete(&self, id: OrderId) -> Result<Order, OrderError> {
        self.transition(id, Action::Complete).await
    }

    pub async fn cancel(&self, id: OrderId) -> Result<Order, OrderError> {
        self.transition(id, Action::Cancel).await
    }

    /// Applies `action` inside the store; the stored order is untouched on failure.
    #[instrument(skip(self))]
    pub async fn transition(&self, id: OrderId, action: Action) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ResourceHandle<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    /// Recovers `TransitionError`/validation errors raised by the entity.
    fn map_error(e: StoreError) -> OrderError {
        match e.entity_error::<OrderError>() {
            Ok(entity_error) => entity_error,
            Err(StoreError::NotFound(id)) => match id.parse() {
                Ok(id) => OrderError::NotFound(id),
                Err(_) => OrderError::Store(format!("Item not found: {}", id)),
            },
            Err(other) => OrderError::Store(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::lifecycle::TransitionError;
    use crate::model::Status;

    #[tokio::test]
    async fn test_transition_error_survives_the_store_boundary() {
        let rejected = TransitionError {
            order_id: OrderId(4),
            attempted_action: Action::Cancel,
            current_status: Status::Cancelled,
        };
        let mut mock = MockClient::<Order>::new();
        mock.expect_action(OrderId(4))
            .return_err(StoreError::Entity(Box::new(OrderError::from(rejected))));

        let client = OrderClient::new(mock.client());
        let err = client.cancel(OrderId(4)).await.unwrap_err();
        assert_eq!(err, OrderError::Transition(rejected));
        mock.verify();
    }

    #[tokio::test]
    async fn test_missing_order_maps_to_not_found() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_action(OrderId(8))
            .return_err(StoreError::NotFound("8".into()));
        mock.expect_get(OrderId(9)).return_ok(None);
        mock.expect_delete(OrderId(10))
            .return_err(StoreError::NotFound("10".into()));

        let client = OrderClient::new(mock.client());
        assert_eq!(
            client.complete(OrderId(8)).await.unwrap_err(),
            OrderError::NotFound(OrderId(8))
        );
        assert_eq!(
            client.find(OrderId(9)).await.unwrap_err(),
            OrderError::NotFound(OrderId(9))
        );
        assert_eq!(
            client.delete(OrderId(10)).await.unwrap_err(),
            OrderError::NotFound(OrderId(10))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_store_maps_to_store_error() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_list().return_err(StoreError::ActorClosed);

        let client = OrderClient::new(mock.client());
        assert!(matches!(client.list().await, Err(OrderError::Store(_))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_create_returns_stored_order() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_create().return_ok(OrderId(1));
        mock.expect_get(OrderId(1))
            .return_ok(Some(Order::new(OrderId(1), "iPhone")));

        let client = OrderClient::new(mock.client());
        let order = client.create_order(OrderCreate::new("iPhone")).await.unwrap();
        assert_eq!(order.status, Status::InProgress);
        mock.verify();
    }
}
