//! # Generic Messages
//!
//! Message types exchanged between `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants are the resource lifecycle: **Create**, **Get**, **Update**, **Delete**,
/// plus **List** for filtered reads, **GetOrCreate** for resources keyed by their owner,
/// and **Action** for resource-specific logic that doesn't fit CRUD.
///
/// The enum is generic over `T: ActorEntity` and uses its associated types, so a cart
/// payload can never reach the catalog actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Returns the entity stored under `T::keyed_id(&params)`, creating it first if absent.
    GetOrCreate {
        params: T::Create,
        respond_to: Response<T>,
    },
    List {
        query: T::Query,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
