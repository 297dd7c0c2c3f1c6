//! Order store: entity implementation and factory.

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Order;

/// Creates the order store actor and its raw client.
///
/// Run the actor with the [`OrderLifecycle`](crate::lifecycle::OrderLifecycle)
/// as its context.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}
