//! # Framework Errors
//!
//! Errors raised by the actor runtime itself. Entity-specific failures travel inside
//! [`FrameworkError::EntityError`] and are recovered by the typed clients with
//! [`FrameworkError::into_entity_error`].

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type from an `EntityError`.
    ///
    /// Returns `Err(self)` when the error came from the runtime or carries a different
    /// error type, so callers can fall back to their own mapping.
    pub fn into_entity_error<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(err) => Ok(*err),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }

    /// True when the actor task is gone (channel closed or response dropped).
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            FrameworkError::ActorClosed | FrameworkError::ActorDropped
        )
    }
}
