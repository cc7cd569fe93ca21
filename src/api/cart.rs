//! `/cart` handlers. Every route acts on the caller's own cart.

use super::{ApiError, ApiJson, ApiPath, AppState};
use crate::access::CustomerCaller;
use crate::model::{Cart, FoodId, LineId};
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItem {
    pub food_id: FoodId,
    #[serde(default = "one")]
    pub quantity: i64,
}

fn one() -> i64 {
    1
}

#[derive(Debug, Deserialize)]
pub struct SetQuantity {
    pub quantity: i64,
}

pub async fn view(
    State(state): State<AppState>,
    CustomerCaller(user): CustomerCaller,
) -> Result<Json<Cart>, ApiError> {
    Ok(Json(state.carts.view(user.id).await?))
}

pub async fn add(
    State(state): State<AppState>,
    CustomerCaller(user): CustomerCaller,
    ApiJson(body): ApiJson<AddItem>,
) -> Result<Json<Cart>, ApiError> {
    let cart = state
        .carts
        .add_item(user.id, body.food_id, body.quantity)
        .await?;
    Ok(Json(cart))
}

pub async fn update_quantity(
    State(state): State<AppState>,
    CustomerCaller(user): CustomerCaller,
    ApiPath(line_id): ApiPath<LineId>,
    ApiJson(body): ApiJson<SetQuantity>,
) -> Result<Json<Cart>, ApiError> {
    let cart = state
        .carts
        .update_quantity(user.id, line_id, body.quantity)
        .await?;
    Ok(Json(cart))
}

pub async fn remove(
    State(state): State<AppState>,
    CustomerCaller(user): CustomerCaller,
    ApiPath(line_id): ApiPath<LineId>,
) -> Result<Json<Cart>, ApiError> {
    Ok(Json(state.carts.remove_line(user.id, line_id).await?))
}

pub async fn clear(
    State(state): State<AppState>,
    CustomerCaller(user): CustomerCaller,
) -> Result<Json<Cart>, ApiError> {
    Ok(Json(state.carts.clear(user.id).await?))
}
