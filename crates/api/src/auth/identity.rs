//! Bearer-token verification against the third-party login provider.
//!
//! Tokens are provider-issued ID tokens. Signature, expiry and audience are
//! checked by `jsonwebtoken`; the decoded payload then has to pass
//! [`ProviderClaims::into_identity`] (verified email, non-empty subject).

use async_trait::async_trait;
use duo_core::error::CoreError;
use duo_core::identity::{Identity, ProviderClaims};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

/// Turns a bearer credential into a verified [`Identity`].
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Any failure is reported as [`CoreError::Unauthorized`].
    async fn verify(&self, token: &str) -> Result<Identity, CoreError>;
}

/// Key material used to check token signatures.
#[derive(Debug, Clone)]
pub enum IdentityKey {
    /// Shared HS256 secret.
    Secret(String),
    /// RS256 public key in PEM form.
    RsaPem(String),
}

/// Configuration for provider token verification.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// Expected `aud` claim (the OAuth client id).
    pub audience: String,
    /// Expected `iss` claim, checked only when set.
    pub issuer: Option<String>,
    pub key: IdentityKey,
}

impl IdentityConfig {
    /// Load identity configuration from environment variables.
    ///
    /// | Env Var                   | Required | Default |
    /// |---------------------------|----------|---------|
    /// | `IDENTITY_AUDIENCE`       | **yes**  | --      |
    /// | `IDENTITY_ISSUER`         | no       | --      |
    /// | `IDENTITY_PUBLIC_KEY_PEM` | one of   | --      |
    /// | `IDENTITY_HMAC_SECRET`    | one of   | --      |
    ///
    /// The PEM key wins when both are set.
    ///
    /// # Panics
    ///
    /// Panics if the audience is missing or neither key is set.
    pub fn from_env() -> Self {
        let audience = std::env::var("IDENTITY_AUDIENCE")
            .expect("IDENTITY_AUDIENCE must be set in the environment");
        assert!(!audience.is_empty(), "IDENTITY_AUDIENCE must not be empty");

        let issuer = std::env::var("IDENTITY_ISSUER")
            .ok()
            .filter(|s| !s.is_empty());

        let key = match (
            std::env::var("IDENTITY_PUBLIC_KEY_PEM").ok().filter(|s| !s.is_empty()),
            std::env::var("IDENTITY_HMAC_SECRET").ok().filter(|s| !s.is_empty()),
        ) {
            (Some(pem), _) => IdentityKey::RsaPem(pem),
            (None, Some(secret)) => IdentityKey::Secret(secret),
            (None, None) => {
                panic!("IDENTITY_PUBLIC_KEY_PEM or IDENTITY_HMAC_SECRET must be set")
            }
        };

        Self {
            audience,
            issuer,
            key,
        }
    }
}

/// [`IdentityVerifier`] backed by local JWT signature checks.
pub struct JwtIdentityVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtIdentityVerifier {
    /// Fails only when the configured PEM cannot be parsed.
    pub fn new(config: &IdentityConfig) -> Result<Self, jsonwebtoken::errors::Error> {
        let (key, algorithm) = match &config.key {
            IdentityKey::Secret(secret) => (DecodingKey::from_secret(secret.as_bytes()), Algorithm::HS256),
            IdentityKey::RsaPem(pem) => (DecodingKey::from_rsa_pem(pem.as_bytes())?, Algorithm::RS256),
        };

        let mut validation = Validation::new(algorithm);
        validation.set_audience(&[config.audience.as_str()]);
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer.as_str()]);
        }

        Ok(Self { key, validation })
    }
}

#[async_trait]
impl IdentityVerifier for JwtIdentityVerifier {
    async fn verify(&self, token: &str) -> Result<Identity, CoreError> {
        let data = decode::<ProviderClaims>(token, &self.key, &self.validation).map_err(|e| {
            tracing::debug!(error = %e, "Rejected bearer token");
            CoreError::Unauthorized("Invalid token".into())
        })?;
        data.claims.into_identity()
    }
}
