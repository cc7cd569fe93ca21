//! HTTP error mapping.

use crate::access::AccessError;
use crate::cart_actor::CartError;
use crate::food_actor::FoodError;
use crate::order_actor::OrderError;
use crate::user_actor::UserError;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Every failure a handler can return. Store errors carry their cause for the log only;
/// the client sees a generic message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Cart is empty")]
    EmptyCart,

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error")]
    Store(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::EmptyCart => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Store(cause) = &self {
            error!(%cause, "Request failed");
        }
        let body = Json(json!({ "message": self.to_string() }));
        (self.status(), body).into_response()
    }
}

impl From<AccessError> for ApiError {
    fn from(e: AccessError) -> Self {
        match e {
            AccessError::Unauthorized => ApiError::Unauthorized(e.to_string()),
            AccessError::Forbidden => ApiError::Forbidden(e.to_string()),
        }
    }
}

impl From<FoodError> for ApiError {
    fn from(e: FoodError) -> Self {
        match e {
            FoodError::NotFound(_) => ApiError::NotFound(e.to_string()),
            FoodError::ValidationError(msg) => ApiError::Validation(msg),
            FoodError::ActorCommunicationError(msg) => ApiError::Store(msg),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(_) => ApiError::NotFound(e.to_string()),
            OrderError::ValidationError(msg) => ApiError::Validation(msg),
            OrderError::InvalidTransition { .. } => ApiError::Validation(e.to_string()),
            OrderError::TotalMismatch { .. } => ApiError::Store(e.to_string()),
            OrderError::ActorCommunicationError(msg) => ApiError::Store(msg),
        }
    }
}

impl From<CartError> for ApiError {
    fn from(e: CartError) -> Self {
        match e {
            CartError::NotFound(msg) => ApiError::NotFound(msg),
            CartError::ValidationError(msg) => ApiError::Validation(msg),
            CartError::EmptyCart => ApiError::EmptyCart,
            CartError::Order(e) => e.into(),
            CartError::ActorCommunicationError(msg) => ApiError::Store(msg),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::NotFound(_) => ApiError::NotFound(e.to_string()),
            UserError::AlreadyExists(msg) | UserError::ValidationError(msg) => {
                ApiError::Validation(msg)
            }
            UserError::ActorCommunicationError(msg) => ApiError::Store(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::Validation(e.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(e: PathRejection) -> Self {
        ApiError::Validation(e.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(e: QueryRejection) -> Self {
        ApiError::Validation(e.body_text())
    }
}
