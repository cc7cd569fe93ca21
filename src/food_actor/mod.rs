//! # Food Actor
//!
//! Owns the menu. No dependencies (`Context = ()`) and no custom actions; everything is
//! create, read, list, update, delete.
//!
//! ```rust
//! use food_ordering::food_actor;
//! use food_ordering::model::{Category, FoodCreate, FoodQuery, UserId};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = food_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     client
//!         .create_food(FoodCreate {
//!             name: "Iced Coffee".into(),
//!             category: Category::Beverage,
//!             price: Decimal::new(399, 2),
//!             description: String::new(),
//!             image_url: String::new(),
//!             available: true,
//!             created_by: UserId(1),
//!         })
//!         .await?;
//!
//!     let menu = client.menu(FoodQuery::menu(Some("beverage".into()), None)).await?;
//!     assert_eq!(menu.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::FoodClient;
use crate::model::Food;
use actor_framework::ResourceActor;

/// Creates a new Food actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Food>, FoodClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, FoodClient::new(generic_client))
}
