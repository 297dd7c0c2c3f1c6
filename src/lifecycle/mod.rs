//! # Order Lifecycle
//!
//! The order state machine: three states, two guarded transitions.
//!
//! | From | Action | To |
//! |---|---|---|
//! | `IN_PROGRESS` | `complete` | `COMPLETED` |
//! | `IN_PROGRESS` | `cancel` | `CANCELLED` |
//!
//! Every other combination fails with [`TransitionError`]. Nothing here does
//! I/O or logging; the order store applies transitions inside its actor, which
//! serializes concurrent attempts on the same order.

mod action;
mod engine;

pub use action::*;
pub use engine::*;
