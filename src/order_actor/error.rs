//! Error types for the Order actor.

use crate::model::OrderStatus;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found")]
    NotFound(String),

    /// The order data or the requested change is invalid.
    #[error("{0}")]
    ValidationError(String),

    /// The status table does not allow this change.
    #[error("Cannot change order status from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// The captured total disagrees with the frozen line prices. Indicates a bug in the
    /// caller, never bad input.
    #[error("Order total {captured} does not match line total {computed}")]
    TotalMismatch { captured: Decimal, computed: Decimal },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
