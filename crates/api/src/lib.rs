//! HTTP server library for the duo website backend.
//!
//! Exposes configuration, state, error handling, controllers and routes so
//! integration tests and the binary entrypoint can both reach them.

pub mod auth;
pub mod config;
pub mod controllers;
pub mod error;
pub mod handlers;
pub mod images;
pub mod middleware;
pub mod notifier;
pub mod response;
pub mod routes;
pub mod state;
