//! # System Lifecycle & Orchestration
//!
//! This module starts, wires and shuts down the running system.
//!
//! ## The CyprusSystem Pattern
//!
//! [`CyprusSystem`] is the conductor: it spawns the book catalog actor from a
//! [`CyprusConfig`], owns the typed client and the shared [`PlaybackState`], and hands
//! out the repository and router views need.
//!
//! ```rust,ignore
//! let system = CyprusSystem::with_config(&CyprusConfig::from_env()?);
//!
//! let router = system.router();
//! let page = router.navigate("/")?;
//! // ... render ...
//!
//! drop(router);
//! system.shutdown().await?;
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the catalog channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - Wait for the actor task to finish
//!
//! Routers and repositories handed out by the system hold client clones. The actor
//! only stops once those are dropped as well, so drop them before calling
//! [`CyprusSystem::shutdown`]. Replies still waiting on their simulated latency are
//! independent tasks and do not hold the actor open.
//!
//! [`PlaybackState`]: crate::playback::PlaybackState

pub mod config;
pub mod cyprus_system;

pub use config::*;
pub use cyprus_system::*;
