//! # ActorClient Trait
//!
//! Common interface for domain-specific clients: default `get` and `list` built on top
//! of a generic `ResourceClient`, with framework errors mapped into the domain error.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for domain-specific clients to inherit the standard catalog reads.
///
/// # Example
///
/// ```rust
/// use cyprus_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
///
/// #[derive(Clone, Debug)]
/// struct Track { id: u32 }
/// impl ActorEntity for Track {
///     type Id = u32;
///     fn id(&self) -> &u32 { &self.id }
/// }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("track error: {0}")]
/// struct TrackError(String);
///
/// struct TrackClient { inner: ResourceClient<Track> }
///
/// impl ActorClient<Track> for TrackClient {
///     type Error = TrackError;
///
///     fn inner(&self) -> &ResourceClient<Track> { &self.inner }
///
///     fn map_error(e: FrameworkError) -> Self::Error { TrackError(e.to_string()) }
/// }
///
/// async fn usage(client: TrackClient) {
///     // get() and list() are provided automatically
///     let _ = client.get(1).await;
///     let _ = client.list().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity, in ascending id order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}
