//! Runtime orchestration.
//!
//! - [`ServiceSystem`] - spawns the stores, wires the lifecycle engine and link
//!   policy, and shuts everything down
//! - [`seed`] - sample data for a fresh process
//! - [`setup_tracing`] - logging setup

pub mod seed;
pub mod system;
pub mod tracing;

pub use self::seed::*;
pub use self::system::*;
pub use self::tracing::*;
