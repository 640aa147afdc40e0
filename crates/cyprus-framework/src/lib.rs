//! # Cyprus Framework
//!
//! Building blocks for the Cyprus audiobook front end: a read-only catalog served by an
//! actor, typed clients to talk to it, and [`Deferred`] handles that let a caller get a
//! value *now* and its content later.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your domain models and how they are keyed
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing and simulated latency
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! On top of that sits [`Deferred`], the "settles later" handle route loaders return.
//!
//! ## Quick Start
//!
//! ```rust
//! use cyprus_framework::{ActorEntity, Deferred, FrameworkError, ResourceActor};
//!
//! #[derive(Clone, Debug)]
//! struct Track { id: u32, title: String }
//!
//! impl ActorEntity for Track {
//!     type Id = u32;
//!     fn id(&self) -> &u32 { &self.id }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let seed = vec![
//!         Track { id: 2, title: "Outro".into() },
//!         Track { id: 1, title: "Intro".into() },
//!     ];
//!     let (actor, client) = ResourceActor::new(10, seed);
//!     tokio::spawn(actor.run());
//!
//!     // Hand out a handle immediately, settle it in the background.
//!     let tracks: Deferred<Vec<Track>, FrameworkError> =
//!         Deferred::spawn(async move { client.list().await });
//!
//!     let tracks = tracks.await.unwrap();
//!     assert_eq!(tracks[0].title, "Intro");
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks needed)
//! - Delayed replies are timed independently, so concurrent callers do not queue behind each other
//! - Every `Deferred` can be cancelled on its own
//!
//! ## Testing
//!
//! The [`mock`] module provides a `MockClient` that hands out a real `ResourceClient<T>`
//! answered from an expectation queue, so client-side logic can be tested without an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod deferred;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use deferred::Deferred;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
