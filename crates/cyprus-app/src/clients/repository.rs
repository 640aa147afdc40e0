//! # Book Repository
//!
//! The read-only data source the route loaders depend on. Loaders only ever see an
//! `Arc<dyn BookRepository>`, so the catalog actor can be swapped for a real backend
//! (or a counting fake in tests) without touching them.

use crate::book_actor::BookError;
use crate::model::{Book, BookId};
use async_trait::async_trait;

#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Every known book, in ascending id order.
    async fn list_books(&self) -> Result<Vec<Book>, BookError>;

    /// The book with `id`, or [`BookError::NotFound`].
    async fn get_book_by_id(&self, id: BookId) -> Result<Book, BookError>;

    /// Looks a book up by its textual key, as it appears in a route.
    ///
    /// Fails with [`BookError::InvalidId`] before any lookup if `raw` is not a
    /// positive integer.
    async fn get_book_by_key(&self, raw: &str) -> Result<Book, BookError> {
        let id: BookId = raw.parse()?;
        self.get_book_by_id(id).await
    }
}
