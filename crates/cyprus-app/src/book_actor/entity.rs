//! Entity trait implementation for the Book domain type.
//!
//! This module contains the [`ActorEntity`] implementation that enables [`Book`]
//! to be served by the generic [`cyprus_framework::ResourceActor`].

use crate::model::{Book, BookId};
use cyprus_framework::ActorEntity;

impl ActorEntity for Book {
    type Id = BookId;

    fn id(&self) -> &BookId {
        &self.id
    }
}
