//! # Entity Trait
//!
//! The `Entity` trait is the contract every stored resource (Order, Employee, …)
//! implements so that one generic [`ResourceActor`](crate::framework::ResourceActor)
//! can persist it. It names the associated types for ids, DTOs, actions, the
//! injected context and the error type, and provides lifecycle hooks.
//!
//! # Provided Methods (Hooks)
//! - [`Entity::on_create`]
//! - [`Entity::on_delete`]
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any stored resource must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they may await. The `Context` value handed to
/// [`ResourceActor::run`](crate::framework::ResourceActor::run) is passed to every
/// hook, which is how collaborators (e.g. the order lifecycle engine) reach the
/// entity without a global container.
#[async_trait]
pub trait Entity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Built from the store's sequence number, so ids sort in creation order.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u64>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations beyond CRUD (e.g. order transitions).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context injected into the actor. Use `()` if nothing is needed.
    type Context: Send + Sync;

    /// One error enum for the whole resource, not one per action.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the assigned id and the payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction, before the entity is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
