//! # Cart Actor
//!
//! One cart per customer, stored under the customer's id. The cart actor depends on the
//! catalog (for current prices) and on the order actor (for checkout); both clients are
//! injected through [`CartContext`] when the actor is started.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for
//!   [`Cart`](crate::model::Cart)
//! - [`actions`] - [`CartAction`] and [`CartActionResult`]
//! - [`error`] - [`CartError`]
//!
//! ```rust,ignore
//! let (cart_actor, cart_client) = cart_actor::new(32);
//! tokio::spawn(cart_actor.run(CartContext {
//!     foods: food_client.clone(),
//!     orders: order_client.clone(),
//! }));
//!
//! cart_client.add_item(customer, food_id, 2).await?;
//! let order = cart_client.checkout(customer, delivery).await?;
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::{CartClient, FoodClient, OrderClient};
use crate::model::Cart;
use actor_framework::ResourceActor;

/// Dependencies of the cart actor.
#[derive(Clone)]
pub struct CartContext {
    pub foods: FoodClient,
    pub orders: OrderClient,
}

/// Creates a new Cart actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Cart>, CartClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CartClient::new(generic_client))
}
