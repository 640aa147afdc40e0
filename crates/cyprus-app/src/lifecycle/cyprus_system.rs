//! # Cyprus System
//!
//! [`CyprusSystem`] starts the catalog actor, owns the shared playback state and shuts
//! everything down again.

use crate::clients::{BookClient, BookRepository};
use crate::lifecycle::CyprusConfig;
use crate::playback::PlaybackState;
use crate::routes::Router;
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for the book player.
///
/// `CyprusSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the catalog actor
/// - **Dependency Wiring**: Handing the repository to the router
/// - **Shared State**: Owning the playback state every view subscribes to
///
/// # Example
///
/// ```ignore
/// let system = CyprusSystem::new();
///
/// let books = system.book_client.list_books().await?;
/// system.playback.toggle();
///
/// system.shutdown().await?;
/// ```
pub struct CyprusSystem {
    /// Client for the Book catalog actor
    pub book_client: BookClient,

    /// The playback flag shared by every view
    pub playback: PlaybackState,

    /// Task handle of the catalog actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl CyprusSystem {
    /// Starts the system with [`CyprusConfig::default`].
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(&CyprusConfig::default())
    }

    /// Starts the catalog actor with `config` and creates a fresh playback state.
    pub fn with_config(config: &CyprusConfig) -> Self {
        let (book_actor, book_client) = crate::book_actor::new(config);
        let handle = tokio::spawn(book_actor.run());

        info!(
            latency_ms = config.latency_ms,
            channel_buffer = config.channel_buffer.get(),
            "System started"
        );

        Self {
            book_client: BookClient::new(book_client),
            playback: PlaybackState::new(),
            handle,
        }
    }

    /// The catalog as a repository, for loaders and views.
    pub fn repository(&self) -> Arc<dyn BookRepository> {
        Arc::new(self.book_client.clone())
    }

    pub fn router(&self) -> Router {
        Router::new(self.repository())
    }

    /// Gracefully shuts down the system.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Closing the channel is the shutdown signal.
        drop(self.book_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for CyprusSystem {
    fn default() -> Self {
        Self::new()
    }
}
