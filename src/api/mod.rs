//! # HTTP API
//!
//! Axum routes over the typed actor clients. Handlers translate JSON into client calls and
//! client errors into [`ApiError`]; they hold no state of their own.

pub mod auth;
pub mod cart;
pub mod error;
pub mod foods;
pub mod orders;

pub use error::ApiError;

use crate::access::resolve_caller;
use crate::clients::{CartClient, FoodClient, OrderClient, UserClient};
use crate::config::Config;
use anyhow::Context;
use axum::extract::{FromRequest, FromRequestParts};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::routing::{delete, get, post, put};
use axum::{middleware, Json, Router};
use serde_json::{json, Value};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Clients shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub foods: FoodClient,
    pub carts: CartClient,
    pub orders: OrderClient,
    pub users: UserClient,
}

/// JSON body whose rejection is a 400 `{message}`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

async fn banner() -> Json<Value> {
    Json(json!({ "message": "Food ordering API is running" }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// All routes, with caller resolution. No CORS, timeout or tracing layers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(banner))
        .route("/health", get(health))
        .route("/auth/register", post(auth::register))
        .route("/auth/me", get(auth::me))
        .route("/foods", get(foods::list).post(foods::create))
        .route(
            "/foods/{id}",
            get(foods::get).put(foods::update).delete(foods::remove),
        )
        .route("/cart", get(cart::view))
        .route("/cart/add", post(cart::add))
        .route("/cart/update/{item_id}", put(cart::update_quantity))
        .route("/cart/remove/{item_id}", delete(cart::remove))
        .route("/cart/clear", delete(cart::clear))
        .route("/orders", post(orders::place).get(orders::all))
        .route("/orders/my-orders", get(orders::mine))
        .route("/orders/{id}", get(orders::get))
        .route("/orders/{id}/status", put(orders::update_status))
        .layer(middleware::from_fn_with_state(
            state.users.clone(),
            resolve_caller,
        ))
        .with_state(state)
}

fn cors(origins: &[String]) -> anyhow::Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|o| HeaderValue::from_str(o).with_context(|| format!("invalid CORS origin {o:?}")))
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true))
}

fn timeout(limit: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, limit)
}

/// The served application: [`router`] plus CORS, the request timeout and request tracing.
pub fn app(state: AppState, config: &Config) -> anyhow::Result<Router> {
    Ok(router(state)
        .layer(timeout(Duration::from_secs(config.request_timeout_secs)))
        .layer(cors(&config.cors_origins)?)
        .layer(TraceLayer::new_for_http()))
}
