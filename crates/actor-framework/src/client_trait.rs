//! # ActorClient Trait
//!
//! Common read/delete operations for resource-specific client wrappers, built on a
//! generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read operations.
///
/// Implementors provide `inner()` and `map_error()`; `get`, `list` and `delete` come for
/// free and return the client's own error type.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Dish { id: u32, vegetarian: bool }
/// #[derive(Debug)] struct DishCreate;
/// #[derive(Debug)] struct DishUpdate;
/// #[derive(Debug)] enum DishAction {}
///
/// #[derive(Debug, thiserror::Error)]
/// enum DishError {
///     #[error("{0}")]
///     ActorCommunicationError(String),
/// }
///
/// impl From<String> for DishError {
///     fn from(s: String) -> Self { DishError::ActorCommunicationError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Dish {
///     type Id = u32;
///     type Create = DishCreate;
///     type Update = DishUpdate;
///     type Action = DishAction;
///     type ActionResult = ();
///     type Query = bool;
///     type Context = ();
///     type Error = DishError;
///
///     fn from_create_params(id: u32, _: DishCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, vegetarian: true })
///     }
///     fn matches(&self, vegetarian_only: &bool) -> bool {
///         !vegetarian_only || self.vegetarian
///     }
///     async fn on_update(&mut self, _: DishUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: DishAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct DishClient {
///     inner: ResourceClient<Dish>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Dish> for DishClient {
///     type Error = DishError;
///
///     fn inner(&self) -> &ResourceClient<Dish> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         e.into_entity_error::<DishError>()
///             .unwrap_or_else(|e| DishError::ActorCommunicationError(e.to_string()))
///     }
/// }
///
/// async fn usage(client: DishClient) {
///     let _ = client.get(1).await;
///     let _ = client.list(true).await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity matching `query`. Order is unspecified.
    #[tracing::instrument(skip(self))]
    async fn list(&self, query: T::Query) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(query).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
