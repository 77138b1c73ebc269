//! Repository layer.
//!
//! Each entity has a store trait (the seam controllers depend on, so tests can
//! substitute in-memory fakes) and a `PgPool`-backed implementation. Every
//! call checks a connection out of the pool for that call only.

pub mod group_repo;
pub mod musician_repo;
pub mod series_repo;
pub mod user_repo;

pub use group_repo::{GroupRepo, GroupStore};
pub use musician_repo::{MusicianRepo, MusicianStore};
pub use series_repo::{SeriesRepo, SeriesStore};
pub use user_repo::{UserRepo, UserStore};
