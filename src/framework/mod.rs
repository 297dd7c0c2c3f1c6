//! Generic, actor-backed resource store.
//!
//! Both the Order Store and the Employee Store are a [`ResourceActor`] over
//! their entity type. The actor owns the records and handles one request at a
//! time; everything else talks to it through a cloneable [`ResourceClient`].
//!
//! # Main Components
//!
//! - [`Entity`] - Trait that stored types implement
//! - [`ResourceActor`] - Owns the records, processes requests sequentially
//! - [`ResourceClient`] - Typed async handle to the actor
//! - [`ResourceHandle`] - Shared `get` / `list` / `delete` for resource clients
//! - [`StoreError`] - Store failures
//!
//! See [`mock`] for testing clients without spawning an actor.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod handle;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::Entity;
pub use error::StoreError;
pub use handle::ResourceHandle;
pub use message::{ResourceRequest, Response};
