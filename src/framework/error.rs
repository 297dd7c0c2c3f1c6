//! # Store Errors
//!
//! Errors raised by the generic store itself, as opposed to errors an entity
//! hook reports (those travel boxed inside [`StoreError::Entity`]).

/// Errors that can occur within the resource store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    Entity(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Recovers the entity's own error type, if this is an entity error of type `E`.
    pub fn entity_error<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            StoreError::Entity(inner) => inner
                .downcast::<E>()
                .map(|boxed| *boxed)
                .map_err(StoreError::Entity),
            other => Err(other),
        }
    }
}
