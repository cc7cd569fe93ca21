//! # Generic Actor Server
//!
//! `ResourceActor` owns the store for one resource type and processes messages
//! sequentially, so entity state needs no locking.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// This is the "server" half of the actor: it owns the `store` and the receiving end of the
/// channel. Each actor handles one message at a time in its own Tokio task, and that is the
/// only concurrency guarantee the application relies on. A checkout that reads a cart,
/// creates an order and clears the cart runs start to finish before the next request for
/// that cart is looked at.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2.  **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Dish { id: u32, name: String }
/// #[derive(Debug)] struct DishCreate { name: String }
/// #[derive(Debug)] struct DishUpdate;
/// #[derive(Debug)] enum DishAction {}
/// #[derive(Debug, thiserror::Error)] #[error("dish error")] struct DishError;
///
/// #[async_trait]
/// impl ActorEntity for Dish {
///     type Id = u32;
///     type Create = DishCreate;
///     type Update = DishUpdate;
///     type Action = DishAction;
///     type ActionResult = ();
///     type Query = ();
///     type Context = ();
///     type Error = DishError;
///
///     fn from_create_params(id: u32, p: DishCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, name: p.name })
///     }
///     async fn on_update(&mut self, _: DishUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: DishAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Dish>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let id = client.create(DishCreate { name: "Garlic Bread".into() }).await.unwrap();
///     assert_eq!(client.get(id).await.unwrap().unwrap().name, "Garlic Bread");
/// }
/// ```
///
/// # Implementation Details
///
/// * **Create**: uses `T::keyed_id` when the entity has a natural key (failing with
///   `AlreadyExists` if it is taken), otherwise the next value of the `u32` sequence. Then
///   `from_create_params`, the `conflicts_with` check against every stored entity,
///   `on_create`, insert.
/// * **GetOrCreate**: returns the entity under `T::keyed_id`, creating it when absent.
/// * **List**: clones every entity whose `matches(query)` is true, in no particular order.
/// * **Update / Action**: mutable access to the stored entity through the hook.
/// * **Delete**: `on_delete`, then removal.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. When it is full, client calls
    /// wait for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// The `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Cart" instead of "food_ordering::model::cart::Cart")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context, entity_type).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::GetOrCreate { params, respond_to } => {
                    debug!(entity_type, ?params, "GetOrCreate");
                    let existing = T::keyed_id(&params)
                        .and_then(|id| self.store.get(&id).cloned());
                    let result = match existing {
                        Some(item) => Ok(item),
                        None => match self.create(params, &context, entity_type).await {
                            Ok(id) => self
                                .store
                                .get(&id)
                                .cloned()
                                .ok_or_else(|| FrameworkError::NotFound(id.to_string())),
                            Err(e) => Err(e),
                        },
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::List { query, respond_to } => {
                    let items: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| item.matches(&query))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?query, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        // Hooks work on a copy so a failed update leaves the stored entity untouched
                        let mut updated = item.clone();
                        if let Err(e) = updated.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        *item = updated.clone();
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(updated));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
        entity_type: &str,
    ) -> Result<T::Id, FrameworkError> {
        let id = match T::keyed_id(&params) {
            Some(id) => {
                if self.store.contains_key(&id) {
                    warn!(entity_type, %id, "Already exists");
                    return Err(FrameworkError::AlreadyExists(id.to_string()));
                }
                id
            }
            None => {
                let id = T::Id::from(self.next_id);
                self.next_id += 1;
                id
            }
        };

        let mut item = T::from_create_params(id.clone(), params).map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            FrameworkError::EntityError(Box::new(e))
        })?;

        if self.store.values().any(|existing| item.conflicts_with(existing)) {
            warn!(entity_type, %id, "Conflicts with an existing entity");
            return Err(FrameworkError::AlreadyExists(id.to_string()));
        }

        if let Err(e) = item.on_create(context).await {
            warn!(entity_type, error = %e, "on_create failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }

        self.store.insert(id.clone(), item);
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(id)
    }
}
