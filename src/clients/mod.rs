//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each wrapper implements [`ActorClient`](actor_framework::ActorClient) for `get`, `list`
//! and `delete`, and adds the domain operations of its resource.

pub mod cart_client;
pub mod food_client;
pub mod order_client;
pub mod user_client;

pub use cart_client::*;
pub use food_client::*;
pub use order_client::*;
pub use user_client::*;

/// Sorts descending by `key`. Used for "most recent first" listings, keyed on
/// `(created_at, id)` so equal timestamps still come out in a stable order.
fn newest_first<T, K: Ord>(mut items: Vec<T>, key: impl Fn(&T) -> K) -> Vec<T> {
    items.sort_by_key(|item| std::cmp::Reverse(key(item)));
    items
}
