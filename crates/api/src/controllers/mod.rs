//! Domain controllers and the orchestration layer in front of them.
//!
//! - [`series`] -- event series and their nested events.
//! - [`musician`] -- musician bio/headshot updates.
//! - [`group`] -- the singleton group profile.
//! - [`user`] -- administrator accounts and first-login binding.
//!
//! Handlers never call a controller directly; they go through
//! [`Orchestrator`], which resolves the caller before any protected write.

pub mod group;
pub mod image_keeper;
pub mod musician;
pub mod series;
pub mod user;

use std::sync::Arc;

use duo_core::error::CoreError;
use duo_core::image::{ImagePolicy, UploadedImage};
use duo_core::types::DbId;
use duo_db::models::group::Group;
use duo_db::models::musician::Musician;
use duo_db::models::series::{CreateEventSeries, EventSeries, ReplaceEventSeries};
use duo_db::models::user::User;
use duo_db::repositories::{
    GroupRepo, GroupStore, MusicianRepo, MusicianStore, SeriesRepo, SeriesStore, UserRepo,
    UserStore,
};
use duo_db::DbPool;

use crate::auth::identity::IdentityVerifier;
use crate::images::ImageStore;

pub use group::GroupController;
pub use image_keeper::ImageKeeper;
pub use musician::MusicianController;
pub use series::SeriesController;
pub use user::UserController;

/// One store per entity.
#[derive(Clone)]
pub struct Stores {
    pub series: Arc<dyn SeriesStore>,
    pub musicians: Arc<dyn MusicianStore>,
    pub group: Arc<dyn GroupStore>,
    pub users: Arc<dyn UserStore>,
}

impl Stores {
    /// Postgres-backed stores sharing one pool.
    pub fn postgres(pool: &DbPool) -> Self {
        Self {
            series: Arc::new(SeriesRepo::new(pool.clone())),
            musicians: Arc::new(MusicianRepo::new(pool.clone())),
            group: Arc::new(GroupRepo::new(pool.clone())),
            users: Arc::new(UserRepo::new(pool.clone())),
        }
    }
}

/// Single entry point for every operation the HTTP layer exposes.
///
/// Protected operations take the raw bearer token and resolve it to an
/// existing [`User`] before touching the target controller. Errors from the
/// controllers pass through unchanged; the first failure ends the sequence.
pub struct Orchestrator {
    series: SeriesController,
    musicians: MusicianController,
    group: GroupController,
    users: UserController,
    images: ImageKeeper,
    identity: Arc<dyn IdentityVerifier>,
}

impl Orchestrator {
    pub fn new(
        stores: Stores,
        images: Arc<dyn ImageStore>,
        identity: Arc<dyn IdentityVerifier>,
        policy: ImagePolicy,
    ) -> Self {
        let images = ImageKeeper::new(images);
        Self {
            series: SeriesController::new(stores.series, images.clone(), policy.clone()),
            musicians: MusicianController::new(stores.musicians, images.clone(), policy),
            group: GroupController::new(stores.group),
            users: UserController::new(stores.users),
            images,
            identity,
        }
    }

    /// Verify the token and resolve its subject to an existing account.
    pub async fn authorize(&self, token: &str) -> Result<User, CoreError> {
        let identity = self.identity.verify(token).await?;
        let user = self.users.get_by_subject(&identity.subject).await?;
        tracing::debug!(user_id = user.id, "Authorized caller");
        Ok(user)
    }

    // -- Series --

    pub async fn get_events(&self) -> Result<Vec<EventSeries>, CoreError> {
        self.series.list_all().await
    }

    pub async fn get_event(&self, id: DbId) -> Result<EventSeries, CoreError> {
        self.series.get(id).await
    }

    pub async fn create_event(
        &self,
        input: CreateEventSeries,
        token: &str,
    ) -> Result<EventSeries, CoreError> {
        self.authorize(token).await?;
        self.series.create(input).await
    }

    pub async fn add_series_poster(
        &self,
        id: DbId,
        image: UploadedImage,
        token: &str,
    ) -> Result<EventSeries, CoreError> {
        self.authorize(token).await?;
        self.series.add_poster(id, image).await
    }

    pub async fn delete_series(&self, id: DbId, token: &str) -> Result<(), CoreError> {
        self.authorize(token).await?;
        self.series.delete(id).await
    }

    pub async fn update_series(
        &self,
        id: DbId,
        input: ReplaceEventSeries,
        token: &str,
    ) -> Result<EventSeries, CoreError> {
        self.authorize(token).await?;
        self.series.replace(id, input).await
    }

    // -- Musicians --

    pub async fn get_musicians(&self) -> Result<Vec<Musician>, CoreError> {
        self.musicians.list_all().await
    }

    pub async fn get_musician(&self, id: DbId) -> Result<Musician, CoreError> {
        self.musicians.get(id).await
    }

    /// The body id must match the path id; this is checked before the token.
    pub async fn update_musician(
        &self,
        path_id: DbId,
        musician: Musician,
        token: &str,
        image: Option<UploadedImage>,
    ) -> Result<Musician, CoreError> {
        if musician.id != path_id {
            return Err(CoreError::Validation(
                "ID in URL does not match ID in request body".into(),
            ));
        }
        self.authorize(token).await?;
        self.musicians.update(musician.id, &musician.bio, image).await
    }

    /// Replace a headshot, keeping the stored bio.
    pub async fn update_musician_headshot(
        &self,
        id: DbId,
        image: UploadedImage,
        token: &str,
    ) -> Result<Musician, CoreError> {
        self.authorize(token).await?;
        let current = self.musicians.get(id).await?;
        self.musicians.update(id, &current.bio, Some(image)).await
    }

    // -- Group --

    pub async fn get_group(&self) -> Result<Group, CoreError> {
        self.group.get().await
    }

    pub async fn update_group_bio(&self, bio: &str, token: &str) -> Result<Group, CoreError> {
        self.authorize(token).await?;
        self.group.update_bio(bio).await
    }

    // -- Users --

    pub async fn get_users(&self, token: &str) -> Result<Vec<User>, CoreError> {
        self.authorize(token).await?;
        self.users.list_all().await
    }

    pub async fn get_user(&self, id: DbId, token: &str) -> Result<User, CoreError> {
        self.authorize(token).await?;
        self.users.get_by_id(id).await
    }

    /// First login: the token's email must belong to a provisioned account.
    pub async fn create_user(&self, token: &str) -> Result<User, CoreError> {
        let identity = self.identity.verify(token).await?;
        self.users.resolve_or_attach(&identity).await
    }

    // -- Images --

    pub fn image_url(&self, reference: &str) -> Result<String, CoreError> {
        self.images.url(reference)
    }
}
