//! # Routes & Deferred Loading
//!
//! Every route has a loader: a plain (non-async) function that receives the route
//! parameters, starts its repository calls and returns the page data *immediately*.
//! Data that comes from the repository is wrapped in a [`Deferred`](cyprus_framework::Deferred),
//! so navigation never waits on the backend. The view renders a placeholder first and
//! fills it in once the handle settles.
//!
//! | Path | Route | Loader | Page data |
//! |------|-------|--------|-----------|
//! | `/` | [`Route::Library`] | [`library::load`] | [`LibraryPageData`] |
//! | `/player/<book_id>` | [`Route::Player`] | [`player::load`] | [`PlayerPageData`] |
//!
//! ## Failure model
//!
//! An unknown path is the only synchronous error ([`RouteError`]). Repository failures
//! (unknown or malformed book id, a closed catalog) travel inside the deferred handle
//! and surface only when it is awaited or polled.
//!
//! Loaders do not cache: every navigation issues a fresh repository call. Loaders must
//! be called from within a Tokio runtime.

pub mod library;
pub mod player;

pub use library::LibraryPageData;
pub use player::PlayerPageData;

use crate::clients::BookRepository;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument, warn};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RouteError {
    #[error("Unknown route: {0}")]
    UnknownRoute(String),
}

/// Named parameters extracted from a path, e.g. `book_id` for `/player/1`.
///
/// Values are the raw path segments, never decoded or validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    values: BTreeMap<String, String>,
}

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Library,
    Player,
}

impl Route {
    /// Matches `path` against the route table.
    ///
    /// A single trailing slash is ignored. The `book_id` segment is kept exactly as
    /// written; validating it is the repository's job.
    pub fn parse(path: &str) -> Result<(Route, RouteParams), RouteError> {
        let trimmed = path.strip_suffix('/').unwrap_or(path);

        if trimmed.is_empty() {
            return Ok((Route::Library, RouteParams::new()));
        }

        if let Some(segment) = trimmed.strip_prefix("/player/") {
            if !segment.is_empty() && !segment.contains('/') {
                return Ok((Route::Player, RouteParams::new().with("book_id", segment)));
            }
        }

        Err(RouteError::UnknownRoute(path.to_string()))
    }
}

/// The page data produced by a navigation.
#[derive(Debug)]
pub enum Page {
    Library(LibraryPageData),
    Player(PlayerPageData),
}

/// Dispatches navigation paths to their loaders.
#[derive(Clone)]
pub struct Router {
    repository: Arc<dyn BookRepository>,
}

impl Router {
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self { repository }
    }

    /// Parses `path` and runs its loader. Returns before any repository call settles.
    #[instrument(skip(self))]
    pub fn navigate(&self, path: &str) -> Result<Page, RouteError> {
        let (route, params) = Route::parse(path).inspect_err(|e| warn!(error = %e, "No route"))?;
        debug!(?route, "Route matched");

        let page = match route {
            Route::Library => Page::Library(library::load(&self.repository, &params)),
            Route::Player => Page::Player(player::load(&self.repository, &params)),
        };
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_library() {
        assert_eq!(Route::parse("/"), Ok((Route::Library, RouteParams::new())));
        assert_eq!(Route::parse(""), Ok((Route::Library, RouteParams::new())));
    }

    #[test]
    fn test_parse_player_keeps_raw_segment() {
        for (path, raw) in [
            ("/player/1", "1"),
            ("/player/1/", "1"),
            ("/player/abc", "abc"),
            ("/player/0", "0"),
        ] {
            let (route, params) = Route::parse(path).unwrap();
            assert_eq!(route, Route::Player);
            assert_eq!(params.get("book_id"), Some(raw));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_paths() {
        for path in ["/player", "/player/", "/player//", "/player/1/extra", "/books", "//"] {
            assert_eq!(
                Route::parse(path),
                Err(RouteError::UnknownRoute(path.to_string())),
                "{path:?} should not match"
            );
        }
    }

    #[test]
    fn test_route_params_builder() {
        let mut params = RouteParams::new().with("book_id", "7");
        assert_eq!(params.get("book_id"), Some("7"));
        assert_eq!(params.get("missing"), None);

        params.insert("book_id", "8");
        assert_eq!(params.get("book_id"), Some("8"));
    }
}
