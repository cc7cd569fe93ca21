//! Start-up and shutdown of the actor system.

pub mod food_system;
pub mod seed;

pub use food_system::FoodSystem;
pub use seed::{seed_admin, seed_catalog};
