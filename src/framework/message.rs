//! # Generic Messages
//!
//! Requests exchanged between a [`ResourceClient`](super::ResourceClient) and its
//! [`ResourceActor`](super::ResourceActor).

use super::entity::ActorEntity;
use super::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Selection evaluated inside the actor by a `Filter` request.
pub type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Message type sent to the actor to request operations.
///
/// - **Create**: builds a new entity from [`ActorEntity::Create`] and assigns its id.
/// - **Get**: fetches one entity by id.
/// - **List**: returns a window of entities in ascending id order. A `limit` of
///   `None` returns everything after `offset`.
/// - **Filter**: returns the entities matching a predicate, in ascending id
///   order. Only the matches leave the actor.
/// - **Action**: runs a resource-specific [`ActorEntity::Action`].
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
        offset: usize,
        limit: Option<usize>,
        respond_to: Response<Vec<T>>,
    },
    Filter {
        predicate: Predicate<T>,
        respond_to: Response<Vec<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

impl<T: ActorEntity> ResourceRequest<T> {
    /// Short name of the request, for logs and test failures.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Create { .. } => "Create",
            Self::Get { .. } => "Get",
            Self::List { .. } => "List",
            Self::Filter { .. } => "Filter",
            Self::Action { .. } => "Action",
        }
    }
}
