//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - The record struct returned to callers (`Serialize`)
//! - `Deserialize` DTOs for the writes that entity supports

pub mod group;
pub mod musician;
pub mod series;
pub mod user;
