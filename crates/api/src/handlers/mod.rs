//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers extract the request, delegate to the [`Orchestrator`] and wrap
//! the result in a [`DataResponse`]; errors map via [`AppError`].
//!
//! [`Orchestrator`]: crate::controllers::Orchestrator
//! [`DataResponse`]: crate::response::DataResponse
//! [`AppError`]: crate::error::AppError

pub mod contact;
pub mod events;
pub mod group;
pub mod images;
pub mod musicians;
pub mod upload;
pub mod users;
