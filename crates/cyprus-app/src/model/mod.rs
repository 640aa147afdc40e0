//! Pure data structures served by the catalog.

pub mod book;

pub use book::*;
