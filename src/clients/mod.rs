//! Typed wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod employee_client;
pub mod order_client;

pub use employee_client::*;
pub use order_client::*;
