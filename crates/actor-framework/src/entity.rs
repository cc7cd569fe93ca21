//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every resource (Food, Cart, Order, User) implements
//! to be managed by the generic `ResourceActor`. It names the associated types for IDs, DTOs,
//! actions, list queries, context and errors, and provides the lifecycle hooks (`on_create`,
//! `on_update`, `on_delete`, `handle_action`).
//!
//! # Provided Methods
//! - [`ActorEntity::keyed_id`] - natural key instead of a generated sequence id
//! - [`ActorEntity::conflicts_with`] - unique constraints checked on create
//! - [`ActorEntity::matches`] - list filtering, defaults to "everything matches"
//! - [`ActorEntity::on_create`] / [`ActorEntity::on_delete`] - no-op hooks
//!
//! You only override these when the resource needs them.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// The actor loop is written once against this trait and reused for every resource type.
/// Associated types keep payloads apart: a `Cart` actor only accepts `CartCreate`, and
/// the compiler rejects a `FoodCreate` sent its way.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they can call other actors. `Context` is injected into
/// every hook when the actor is started (`run(context)`), which lets the cart actor hold a
/// food client and an order client without either existing at construction time.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `AddItem`, `Checkout`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Filter accepted by `List` requests. Use `()` if the resource is only listed whole.
    type Query: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per actor rather than one per message. Clients get a single type to match
    /// on, at the cost of every operation technically being able to return every variant.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Natural key for a new entity.
    ///
    /// Resources that exist at most once per owner (a cart per customer) return the owner's
    /// key here and the actor stores the entity under it. `None` means "assign the next
    /// sequence number".
    fn keyed_id(_params: &Self::Create) -> Option<Self::Id> {
        None
    }

    /// Unique constraint check. A new entity that conflicts with any stored one is
    /// rejected with `AlreadyExists` before it is inserted.
    fn conflicts_with(&self, _existing: &Self) -> bool {
        false
    }

    /// Whether this entity belongs in the result of a `List` request.
    fn matches(&self, _query: &Self::Query) -> bool {
        true
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called immediately after the entity is created and initialized.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    ///
    /// The entity is only mutated through `&mut self`; an implementation that returns an
    /// error must leave `self` as it found it.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
