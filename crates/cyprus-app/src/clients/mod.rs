//! Type-safe wrappers around [`ResourceClient`](cyprus_framework::ResourceClient).

pub mod book_client;
pub mod repository;

pub use book_client::*;
pub use repository::*;
