//! # Actor Framework
//!
//! Building blocks for resource-oriented actor systems on Tokio. Each resource type
//! (dishes, carts, orders, users) is owned by one actor task that holds the only copy of
//! its state and processes requests one at a time. Everything else talks to it through a
//! cloneable, typed client.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): the resource's data, its create/update payloads, its
//!    custom actions, its list filter, and the hooks that run inside the actor.
//! 2. **Runtime** ([`ResourceActor`]): the message loop and the in-memory store.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): the typed request/response API.
//!
//! Resources coordinate by sending each other messages. A cart checkout, for example, runs
//! as a cart action whose context holds the order client; because the cart actor handles
//! one message at a time, no other request can observe the cart half checked out.
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Dish {
//!     id: u32,
//!     name: String,
//!     available: bool,
//! }
//!
//! #[derive(Debug)] struct DishCreate { name: String }
//! #[derive(Debug)] struct DishUpdate { available: Option<bool> }
//! #[derive(Debug)] enum DishAction {}
//! #[derive(Debug)] struct AvailableOnly;
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("{0}")]
//! struct DishError(String);
//!
//! #[async_trait]
//! impl ActorEntity for Dish {
//!     type Id = u32;
//!     type Create = DishCreate;
//!     type Update = DishUpdate;
//!     type Action = DishAction;
//!     type ActionResult = ();
//!     type Query = AvailableOnly;
//!     type Context = ();
//!     type Error = DishError;
//!
//!     fn from_create_params(id: u32, params: DishCreate) -> Result<Self, Self::Error> {
//!         if params.name.trim().is_empty() {
//!             return Err(DishError("name is required".into()));
//!         }
//!         Ok(Self { id, name: params.name, available: true })
//!     }
//!
//!     fn matches(&self, _: &AvailableOnly) -> bool {
//!         self.available
//!     }
//!
//!     async fn on_update(&mut self, update: DishUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         if let Some(available) = update.available { self.available = available; }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, _: DishAction, _: &()) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Dish>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let pizza = client.create(DishCreate { name: "Margherita Pizza".into() }).await.unwrap();
//!     let cake = client.create(DishCreate { name: "Chocolate Cake".into() }).await.unwrap();
//!     client.update(cake, DishUpdate { available: Some(false) }).await.unwrap();
//!
//!     let menu = client.list(AvailableOnly).await.unwrap();
//!     assert_eq!(menu.len(), 1);
//!     assert_eq!(menu[0].id, pizza);
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are handed to `run(context)`, not to `new()`. All actors and clients can be
//! created first and wired afterwards, so an actor can depend on a client whose actor is
//! started later:
//!
//! ```rust,ignore
//! let (food_actor, food_client) = ResourceActor::<Food>::new(32);
//! let (order_actor, order_client) = ResourceActor::<Order>::new(32);
//! let (cart_actor, cart_client) = ResourceActor::<Cart>::new(32);
//!
//! tokio::spawn(food_actor.run(()));
//! tokio::spawn(order_actor.run(()));
//! tokio::spawn(cart_actor.run(CartContext { foods: food_client, orders: order_client }));
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient` from scripted expectations, so
//! client wrappers and actors with dependencies can be tested without the actors behind
//! them.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
