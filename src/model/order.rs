//! Represents a customer order.
//!
//! # Store
//! `Order` implements [`Entity`](crate::framework::Entity) (see
//! [`order_actor`](crate::order_actor)), so it lives in a
//! [`ResourceActor`](crate::framework::ResourceActor). Its `status` only ever
//! changes through [`OrderLifecycle::attempt_transition`](crate::lifecycle::OrderLifecycle::attempt_transition).

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::num::ParseIntError;
use std::str::FromStr;

/// Store-assigned order identifier. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for OrderId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of an order. `InProgress` is the only non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    InProgress,
    Completed,
    Cancelled,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::InProgress, Status::Completed, Status::Cancelled];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::InProgress => "IN_PROGRESS",
            Status::Completed => "COMPLETED",
            Status::Cancelled => "CANCELLED",
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub description: String,
    pub status: Status,
}

impl Order {
    /// Creates an order in the initial `InProgress` state.
    pub fn new(id: OrderId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            status: Status::InProgress,
        }
    }

    /// Same order, different status. Used by the lifecycle engine and in tests.
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }
}

/// Payload for creating a new order. The status is never client-supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub description: String,
}

impl OrderCreate {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}
