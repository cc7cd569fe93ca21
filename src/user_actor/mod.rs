//! # User Actor
//!
//! Registered customers and admins, with the bearer tokens the HTTP layer resolves on
//! every request. No dependencies and no custom actions.
//!
//! ```rust
//! use food_ordering::user_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let user = client.register("Alice", "alice@example.com").await?;
//!     let found = client.find_by_token(&user.token).await?;
//!     assert_eq!(found.map(|u| u.id), Some(user.id));
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use actor_framework::ResourceActor;

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, UserClient::new(generic_client))
}
