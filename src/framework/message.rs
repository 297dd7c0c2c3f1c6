//! # Store Messages
//!
//! Requests sent from a [`ResourceClient`](crate::framework::ResourceClient) to its
//! [`ResourceActor`](crate::framework::ResourceActor), each carrying a one-shot
//! reply channel.

use crate::framework::entity::Entity;
use crate::framework::error::StoreError;
use tokio::sync::oneshot;

/// The one-shot response channel used by the store actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// A request to the store.
///
/// The variants are the CRUD operations every stored resource supports, plus
/// `List` for the aggregate listing and `Action` for resource-specific logic
/// (order transitions). Using the entity's associated types keeps an order
/// payload from ever reaching the employee store.
#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
