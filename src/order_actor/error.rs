//! Error types for order operations.

use crate::lifecycle::TransitionError;
use crate::model::OrderId;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order does not exist.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// The action is not allowed in the order's current status.
    #[error(transparent)]
    Transition(#[from] TransitionError),

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    Validation(String),

    /// The order store could not be reached.
    #[error("Order store error: {0}")]
    Store(String),
}
