//! # Hypermedia
//!
//! Link descriptors, the policy deciding which links a resource carries, and
//! the HAL-style JSON wrappers the API returns.
//!
//! For orders the policy is strictly derived from the lifecycle: an order in
//! progress advertises `complete` and `cancel`, a finished one advertises
//! neither. Ordering is fixed (`self`, `collection`, `complete`, `cancel`) so
//! two responses for the same state are byte-identical.

pub mod link;
pub mod model;
pub mod policy;

pub use link::*;
pub use model::*;
pub use policy::*;
