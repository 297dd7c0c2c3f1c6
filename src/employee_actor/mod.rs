//! Employee store: entity implementation and factory.

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Employee;

/// Creates the employee store actor and its raw client. Runs with `()` as context.
pub fn new(buffer_size: usize) -> (ResourceActor<Employee>, ResourceClient<Employee>) {
    ResourceActor::new(buffer_size)
}
