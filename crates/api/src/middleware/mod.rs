//! Request extractors shared by protected handlers.
//!
//! - [`auth::BearerToken`] -- the raw credential from the `Authorization` header.

pub mod auth;
