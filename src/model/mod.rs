//! Data structures managed by the resource actors, with their create/update payloads.
//!
//! Each entity's [`ActorEntity`](actor_framework::ActorEntity) implementation lives next to
//! its actor (`food_actor`, `cart_actor`, ...); this module only holds the data.

pub mod cart;
pub mod food;
pub mod ids;
pub mod order;
pub mod user;

pub use cart::*;
pub use food::*;
pub use ids::*;
pub use order::*;
pub use user::*;
