//! # Generic Messages
//!
//! The request type exchanged between `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message sent to the actor to read from its catalog.
///
/// The catalog is read-only, so the request set is the "R" of CRUD only:
///
/// - **List**: every entity, in ascending id order.
/// - **Get**: a single entity by id, `None` if the id is unknown.
///
/// Whether a missing entity is an error is a domain decision, so `Get`
/// answers with an `Option` and leaves the mapping to the typed client.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
}
