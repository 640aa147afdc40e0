//! # Catalog Actor Server
//!
//! This module defines the `ResourceActor`, the server side of the framework. It owns a
//! seeded, read-only catalog of entities and answers requests sequentially, so the
//! store is never shared and needs no lock.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::message::{ResourceRequest, Response};
use crate::error::FrameworkError;
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The generic actor that serves a catalog of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel. Every request is handled inside `run()`, one
/// message at a time, which gives exclusive access to the store without a `Mutex`.
///
/// # Simulated latency
/// A catalog standing in for a remote backend can be given a `latency`. Replies are
/// then delivered by a short-lived timer task per request, so one slow reply never
/// holds up the loop and every caller waits the same amount of time, independently.
/// If the caller has gone away by the time the timer fires, the reply is dropped.
///
/// # Usage Pattern
///
/// ```rust
/// use cyprus_framework::{ActorEntity, ResourceActor};
/// use std::time::Duration;
///
/// #[derive(Clone, Debug)]
/// struct Track { id: u32, title: String }
///
/// impl ActorEntity for Track {
///     type Id = u32;
///     fn id(&self) -> &u32 { &self.id }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let seed = vec![Track { id: 1, title: "Intro".into() }];
///     let (actor, client) = ResourceActor::new(10, seed);
///     tokio::spawn(actor.with_latency(Duration::from_millis(5)).run());
///
///     let tracks = client.list().await.unwrap();
///     assert_eq!(tracks.len(), 1);
///     assert!(client.get(7).await.unwrap().is_none());
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    latency: Duration,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` seeded with `seed` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `seed` - The catalog contents. Later entries replace earlier ones with the same id.
    ///
    /// # Returns
    ///
    /// A tuple containing:
    /// 1. The `ResourceActor` instance (the server), which must be run via `.run()`.
    /// 2. The `ResourceClient` instance, which can be cloned and shared to send requests.
    pub fn new(buffer_size: usize, seed: impl IntoIterator<Item = T>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let store = seed
            .into_iter()
            .map(|item| (item.id().clone(), item))
            .collect();
        let actor = Self {
            receiver,
            store,
            latency: Duration::ZERO,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Delays every reply by `latency` to model a remote call.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Book" instead of "cyprus_app::model::book::Book")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(
            entity_type,
            size = self.store.len(),
            latency_ms = self.latency.as_millis() as u64,
            "Actor started"
        );

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self.store.values().cloned().collect();
                    debug!(entity_type, count = items.len(), "List");
                    self.reply(respond_to, Ok(items));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    self.reply(respond_to, Ok(item));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn reply<R: Send + 'static>(&self, respond_to: Response<R>, result: Result<R, FrameworkError>) {
        if self.latency.is_zero() {
            let _ = respond_to.send(result);
            return;
        }

        let latency = self.latency;
        tokio::spawn(async move {
            tokio::time::sleep(latency).await;
            // The requester may have been dropped (navigated away); nothing to do then.
            let _ = respond_to.send(result);
        });
    }
}
