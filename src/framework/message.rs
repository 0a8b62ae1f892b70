//! # Generic Messages
//!
//! The generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use super::entity::ActorEntity;
use super::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// Each actor manages exactly one kind of resource (the [`ActorEntity`]), and every
/// operation is one of a small set of lifecycle requests:
///
/// - **Create**: Uses [`ActorEntity::Create`] to initialize a new resource.
/// - **Get**: Fetches the current state of one resource by ID.
/// - **List**: Fetches every resource, in creation order.
/// - **Delete**: Removes the resource.
/// - **Action**: Executes a custom [`ActorEntity::Action`] against one resource.
///
/// A message is handled to completion before the next one is read, so each
/// request is applied as a single unit.
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
    List {
        respond_to: Response<Vec<T>>,
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
