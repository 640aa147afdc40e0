//! Loader for the library page (`/`): every book in the catalog.

use super::RouteParams;
use crate::book_actor::BookError;
use crate::clients::BookRepository;
use crate::model::Book;
use cyprus_framework::Deferred;
use std::sync::Arc;
use tracing::{debug, instrument};

#[derive(Debug)]
pub struct LibraryPageData {
    pub books: Deferred<Vec<Book>, BookError>,
}

/// Starts listing the catalog and returns without waiting for it.
///
/// The route has no parameters; `_params` is accepted to keep every loader's shape
/// the same.
#[instrument(name = "load_library", skip_all)]
pub fn load(repository: &Arc<dyn BookRepository>, _params: &RouteParams) -> LibraryPageData {
    let repository = Arc::clone(repository);
    let books = Deferred::spawn(async move { repository.list_books().await });
    debug!("Books requested");
    LibraryPageData { books }
}
