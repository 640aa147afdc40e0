//! Loader for the player page (`/player/<book_id>`): one book.

use super::RouteParams;
use crate::book_actor::BookError;
use crate::clients::BookRepository;
use crate::model::Book;
use cyprus_framework::Deferred;
use std::sync::Arc;
use tracing::{debug, instrument};

#[derive(Debug)]
pub struct PlayerPageData {
    /// The `book_id` route parameter, exactly as it appeared in the path.
    pub book_id: String,
    pub book: Deferred<Book, BookError>,
}

/// Starts looking up `book_id` and returns without waiting for it.
///
/// A missing parameter is treated as the empty key, so `book` settles with
/// [`BookError::InvalidId`]. Unknown ids settle with [`BookError::NotFound`].
#[instrument(name = "load_player", skip_all, fields(book_id = ?params.get("book_id")))]
pub fn load(repository: &Arc<dyn BookRepository>, params: &RouteParams) -> PlayerPageData {
    let book_id = params.get("book_id").unwrap_or_default().to_string();
    let repository = Arc::clone(repository);
    let key = book_id.clone();
    let book = Deferred::spawn(async move { repository.get_book_by_key(&key).await });
    debug!("Book requested");

    PlayerPageData { book_id, book }
}
