//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every catalog record (a `Book`, a
//! track, ...) implements to be served by the generic `ResourceActor`.
//!
//! A catalog is read-only: the actor is seeded once with its entities and only
//! ever hands out clones. That is why the trait carries no lifecycle hooks,
//! just the identifier used to key and order the store.
//!
//! # Architecture Note
//! `Id` is `Ord` rather than `Hash` because the actor keeps its store in a
//! `BTreeMap`. Listing the store therefore always yields entities in ascending
//! id order, which is the stable ordering clients rely on.

use std::fmt::{Debug, Display};

/// Trait that any catalog entity must implement to be served by `ResourceActor`.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique, stable identifier for this entity (e.g., `BookId`, `u32`).
    type Id: Ord + Clone + Send + Sync + Display + Debug;

    /// The identifier of this entity. Used as the store key when seeding.
    fn id(&self) -> &Self::Id;
}
