//! Authentication primitives.
//!
//! - [`identity`] -- verification of bearer tokens issued by the login provider.

pub mod identity;
