//! `/auth` handlers.

use super::{ApiError, ApiJson, AppState};
use crate::access::CustomerCaller;
use crate::model::User;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct Register {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Registration response. The only place a token is ever returned.
#[derive(Debug, Serialize)]
pub struct Registered {
    pub user: User,
    pub token: String,
}

pub async fn register(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Register>,
) -> Result<(StatusCode, Json<Registered>), ApiError> {
    let user = state.users.register(&body.name, &body.email).await?;
    let token = user.token.clone();
    Ok((StatusCode::CREATED, Json(Registered { user, token })))
}

pub async fn me(CustomerCaller(user): CustomerCaller) -> Json<User> {
    Json(user)
}
