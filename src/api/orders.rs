//! `/orders` handlers.

use super::{ApiError, ApiJson, ApiPath, AppState};
use crate::access::{ensure_owner_or_admin, AdminCaller, CustomerCaller};
use crate::model::{Delivery, Order, OrderId, OrderUpdate};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

/// Checks out the caller's cart.
pub async fn place(
    State(state): State<AppState>,
    CustomerCaller(user): CustomerCaller,
    ApiJson(delivery): ApiJson<Delivery>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let order = state.carts.checkout(user.id, delivery).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn mine(
    State(state): State<AppState>,
    CustomerCaller(user): CustomerCaller,
) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(state.orders.for_customer(user.id).await?))
}

pub async fn all(
    State(state): State<AppState>,
    _admin: AdminCaller,
) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(state.orders.all().await?))
}

pub async fn get(
    State(state): State<AppState>,
    CustomerCaller(user): CustomerCaller,
    ApiPath(id): ApiPath<OrderId>,
) -> Result<Json<Order>, ApiError> {
    let order = state.orders.find(id).await?;
    ensure_owner_or_admin(&user, order.customer)?;
    Ok(Json(order))
}

pub async fn update_status(
    State(state): State<AppState>,
    _admin: AdminCaller,
    ApiPath(id): ApiPath<OrderId>,
    ApiJson(body): ApiJson<OrderUpdate>,
) -> Result<Json<Order>, ApiError> {
    Ok(Json(state.orders.update_status(id, body.status).await?))
}
