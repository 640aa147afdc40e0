//! # Framework Errors
//!
//! Common error types for the catalog actor and the deferred handles built on it.
//! Domain crates convert these into their own error enums (see `ActorClient::map_error`).

/// Errors that can occur within the framework itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Deferred load was cancelled")]
    Cancelled,
    #[error("Deferred task ended without settling")]
    Abandoned,
}
