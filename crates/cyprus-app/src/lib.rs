//! # Cyprus App Library
//!
//! The core of the Cyprus book player: the book catalog, the route loaders that load
//! it without blocking navigation, and the shared playback state.
//!
//! This library exposes the core modules of the application for the binary and for
//! integration testing.

pub mod book_actor;
pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod playback;
pub mod routes;
