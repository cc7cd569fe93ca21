//! # Order Actor
//!
//! Stores placed orders. New orders arrive only from the cart actor's checkout, which
//! holds an [`OrderClient`] in its context. Status changes go through `update`, where the
//! transition table is enforced.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use actor_framework::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
