//! Plain data types stored by the [`framework`](crate::framework) and served by the [`api`](crate::api).

pub mod employee;
pub mod order;

pub use employee::*;
pub use order::*;
