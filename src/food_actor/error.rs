//! Error types for the Food actor.

use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FoodError {
    /// The requested menu item does not exist.
    #[error("Food item not found")]
    NotFound(String),

    /// The item data provided is invalid (blank name, negative price).
    #[error("{0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for FoodError {
    fn from(msg: String) -> Self {
        FoodError::ActorCommunicationError(msg)
    }
}
