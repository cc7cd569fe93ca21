//! `/foods` handlers. Reads are public; writes need an admin.

use super::{ApiError, ApiJson, ApiPath, ApiQuery, AppState};
use crate::access::AdminCaller;
use crate::model::{Category, Food, FoodCreate, FoodId, FoodQuery, FoodUpdate};
use actor_framework::ActorClient;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct MenuParams {
    pub category: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFood {
    pub name: String,
    pub category: Category,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default = "available_by_default")]
    pub available: bool,
}

fn available_by_default() -> bool {
    true
}

pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<MenuParams>,
) -> Result<Json<Vec<Food>>, ApiError> {
    let query = FoodQuery::menu(params.category, params.search);
    Ok(Json(state.foods.menu(query).await?))
}

pub async fn get(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<FoodId>,
) -> Result<Json<Food>, ApiError> {
    Ok(Json(state.foods.find(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    AdminCaller(admin): AdminCaller,
    ApiJson(body): ApiJson<NewFood>,
) -> Result<(StatusCode, Json<Food>), ApiError> {
    let food = state
        .foods
        .create_food(FoodCreate {
            name: body.name,
            category: body.category,
            price: body.price,
            description: body.description,
            image_url: body.image_url,
            available: body.available,
            created_by: admin.id,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(food)))
}

pub async fn update(
    State(state): State<AppState>,
    _admin: AdminCaller,
    ApiPath(id): ApiPath<FoodId>,
    ApiJson(update): ApiJson<FoodUpdate>,
) -> Result<Json<Food>, ApiError> {
    Ok(Json(state.foods.update_food(id, update).await?))
}

pub async fn remove(
    State(state): State<AppState>,
    _admin: AdminCaller,
    ApiPath(id): ApiPath<FoodId>,
) -> Result<Json<Value>, ApiError> {
    state.foods.delete(id).await?;
    Ok(Json(json!({ "message": "Food item removed" })))
}
