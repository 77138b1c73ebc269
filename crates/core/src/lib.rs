//! Domain primitives shared by the persistence and HTTP layers.
//!
//! Nothing in this crate performs I/O.

pub mod content;
pub mod diagnostics;
pub mod error;
pub mod identity;
pub mod image;
pub mod types;
