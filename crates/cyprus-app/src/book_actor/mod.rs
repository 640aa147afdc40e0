//! # Book Actor
//!
//! The catalog actor that serves the fixed set of books.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](cyprus_framework::ActorEntity) implementation for [`Book`]
//! - [`error`] - [`BookError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the seeded actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use cyprus_app::book_actor;
//! use cyprus_app::clients::{BookClient, BookRepository};
//! use cyprus_app::lifecycle::CyprusConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CyprusConfig { latency_ms: 0, ..CyprusConfig::default() };
//!     let (actor, generic_client) = book_actor::new(&config);
//!     let client = BookClient::new(generic_client);
//!
//!     tokio::spawn(actor.run());
//!
//!     let books = client.list_books().await?;
//!     assert_eq!(books.len(), 2);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::lifecycle::CyprusConfig;
use crate::model::{catalog, Book};
use cyprus_framework::{ResourceActor, ResourceClient};

/// Creates a new Book actor, seeded with the fixed catalog, and its client.
pub fn new(config: &CyprusConfig) -> (ResourceActor<Book>, ResourceClient<Book>) {
    let (actor, client) = ResourceActor::new(config.channel_buffer.get(), catalog());
    (actor.with_latency(config.latency()), client)
}
