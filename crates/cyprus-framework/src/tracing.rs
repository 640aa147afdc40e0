//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber used by the binaries.
//!
//! The format is compact and hides the module prefix (`with_target(false)`); actors tag
//! their events with an `entity_type` field instead. Verbosity comes from `RUST_LOG`:
//!
//! ```bash
//! # Actor lifecycle only
//! RUST_LOG=info cargo run
//!
//! # Every catalog request, route load and playback toggle
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug`, opening the library page looks like:
//!
//! ```text
//! INFO Actor started entity_type="Book" size=2 latency_ms=1500
//! DEBUG navigate: Route matched path="/" route=Library
//! DEBUG navigate:load_library: Sending request
//! DEBUG List entity_type="Book" count=2
//! ```

/// Initializes the global subscriber. Panics if one is already installed.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
