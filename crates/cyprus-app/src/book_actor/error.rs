//! Error types for the Book catalog.

use crate::model::BookId;
use cyprus_framework::FrameworkError;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Errors that can occur while loading books.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookError {
    /// No book exists with the requested id.
    #[error("Book not found: {0}")]
    NotFound(BookId),

    /// The textual key could not be parsed into a [`BookId`].
    #[error("Invalid book id: {0:?}")]
    InvalidId(String),

    /// The load was cancelled before it settled, e.g. on navigating away.
    #[error("Load cancelled")]
    Cancelled,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for BookError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Cancelled => BookError::Cancelled,
            other => BookError::ActorCommunicationError(other.to_string()),
        }
    }
}

// Views render errors as plain text.
impl Serialize for BookError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_errors_keep_cancellation_distinct() {
        assert_eq!(BookError::from(FrameworkError::Cancelled), BookError::Cancelled);
        assert_eq!(
            BookError::from(FrameworkError::Abandoned),
            BookError::ActorCommunicationError("Deferred task ended without settling".to_string())
        );
        assert_eq!(
            BookError::from(FrameworkError::ActorClosed),
            BookError::ActorCommunicationError("Actor closed".to_string())
        );
    }
}
