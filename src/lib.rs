//! # Food Ordering
//!
//! Backend for a small food-ordering service: a public menu, one cart per customer,
//! checkout into orders, and an admin workflow for the menu and order status.
//!
//! Each resource (foods, carts, orders, users) is owned by one actor built on
//! [`actor_framework`]. The actor holds the only copy of its records and handles requests
//! one at a time, so cart totals and checkouts need no locks.
//!
//! ## Module Tour
//!
//! - [`model`]: the records and their create/update payloads.
//! - [`food_actor`], [`cart_actor`], [`order_actor`], [`user_actor`]: the
//!   [`ActorEntity`](actor_framework::ActorEntity) implementations and their error types.
//! - [`clients`]: typed clients over each actor. All other code goes through these.
//! - [`access`]: bearer-token callers and the role checks routes declare.
//! - [`api`]: the Axum router.
//! - [`lifecycle`]: starting, seeding and stopping the actors.
//! - [`config`]: command-line and environment settings.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- --seed-catalog --admin-token secret
//! ```

pub mod access;
pub mod api;
pub mod cart_actor;
pub mod clients;
pub mod config;
pub mod food_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod user_actor;
