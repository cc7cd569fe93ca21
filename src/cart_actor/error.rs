//! Error types for the Cart actor.

use crate::order_actor::OrderError;
use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The cart, one of its lines, or the food being added does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Bad quantity or missing delivery details.
    #[error("{0}")]
    ValidationError(String),

    /// Checkout of a cart with no lines (or no cart at all).
    #[error("Cart is empty")]
    EmptyCart,

    /// The order actor refused the order built from this cart.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CartError {
    pub fn cart_not_found() -> Self {
        CartError::NotFound("Cart not found".into())
    }

    pub fn line_not_found() -> Self {
        CartError::NotFound("Item not found in cart".into())
    }

    pub fn food_not_found() -> Self {
        CartError::NotFound("Food item not found".into())
    }
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
