//! # Book
//!
//! The catalog record and its typed identifier.
//!
//! # Actor Framework
//! [`Book`] implements the [`ActorEntity`](cyprus_framework::ActorEntity) trait
//! (see [`crate::book_actor::entity`]), allowing it to be served by a
//! [`ResourceActor`](cyprus_framework::ResourceActor).
//!
//! A `Book` is immutable once constructed: the catalog actor never updates or deletes
//! one, and readers only ever receive clones.

use serde::{Deserialize, Serialize};

use crate::book_actor::BookError;
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Books. Always positive.
///
/// Route parameters arrive as text, so the conversion from a URL segment is an
/// explicit [`FromStr`] step that can fail with [`BookError::InvalidId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub u32);

impl From<u32> for BookId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = BookError;

    /// Parses the textual form used in routes (`"1"`, `"42"`).
    ///
    /// Whitespace, signs other than a leading `+`, overflow and `0` are rejected.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.parse::<u32>() {
            Ok(0) | Err(_) => Err(BookError::InvalidId(raw.to_string())),
            Ok(id) => Ok(Self(id)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
}

impl Book {
    /// Creates a new Book instance.
    ///
    /// # Arguments
    /// * `id` - Unique, stable identifier
    /// * `title` - Book title
    /// * `author` - Book author
    pub fn new(id: impl Into<BookId>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
        }
    }
}

/// The fixed catalog the simulated repository serves, in ascending id order.
pub fn catalog() -> Vec<Book> {
    vec![
        Book::new(1, "Book 1", "Author 1"),
        Book::new(2, "Book 2", "Author 2"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_ids() {
        assert_eq!("1".parse::<BookId>(), Ok(BookId(1)));
        assert_eq!("999".parse::<BookId>(), Ok(BookId(999)));
    }

    #[test]
    fn test_parse_rejects_malformed_ids() {
        for raw in ["", "abc", "0", " 1", "1 ", "-1", "1.5", "99999999999"] {
            assert_eq!(
                raw.parse::<BookId>(),
                Err(BookError::InvalidId(raw.to_string())),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_is_bare_number() {
        assert_eq!(BookId(7).to_string(), "7");
        assert_eq!(BookId::from(12), BookId(12));
    }

    #[test]
    fn test_catalog_is_fixed_and_ordered() {
        let books = catalog();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0], Book::new(1, "Book 1", "Author 1"));
        assert_eq!(books[1], Book::new(2, "Book 2", "Author 2"));
        assert!(books.windows(2).all(|w| w[0].id < w[1].id));
    }
}
