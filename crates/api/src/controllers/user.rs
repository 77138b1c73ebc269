//! Administrator accounts and first-login identity binding.

use std::sync::Arc;

use duo_core::diagnostics::record_failure;
use duo_core::error::CoreError;
use duo_core::identity::Identity;
use duo_core::types::DbId;
use duo_db::models::user::User;
use duo_db::repositories::UserStore;

pub struct UserController {
    store: Arc<dyn UserStore>,
}

impl UserController {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> Result<Vec<User>, CoreError> {
        self.store
            .list()
            .await
            .map_err(|e| record_failure("Error loading users", &e))
    }

    pub async fn get_by_id(&self, id: DbId) -> Result<User, CoreError> {
        self.store
            .find_by_id(id)
            .await
            .map_err(|e| record_failure("Error loading user", &e))?
            .ok_or_else(|| CoreError::not_found("User", id))
    }

    pub async fn get_by_email(&self, email: &str) -> Result<User, CoreError> {
        self.store
            .find_by_email(email)
            .await
            .map_err(|e| record_failure("Error loading user", &e))?
            .ok_or_else(|| CoreError::not_found_by("User", "email", email))
    }

    pub async fn get_by_subject(&self, subject: &str) -> Result<User, CoreError> {
        self.store
            .find_by_subject(subject)
            .await
            .map_err(|e| record_failure("Error loading user", &e))?
            .ok_or_else(|| CoreError::not_found_by("User", "subject", subject))
    }

    /// Resolve a verified identity to its account, binding the subject on the
    /// account's first login.
    ///
    /// Accounts are provisioned by email; an unknown email is not-found and
    /// nothing is created. A subject that is already bound is never replaced.
    pub async fn resolve_or_attach(&self, identity: &Identity) -> Result<User, CoreError> {
        let user = self.get_by_email(&identity.email).await?;

        if user.subject.is_none() {
            let bound = self
                .store
                .attach_subject(&identity.email, &identity.subject)
                .await
                .map_err(|e| record_failure("Error binding identity subject", &e))?;
            if bound {
                tracing::info!(user_id = user.id, "Bound identity subject on first login");
            }
        }

        self.get_by_subject(&identity.subject).await
    }
}
