//! Identity claims issued by the third-party login provider.
//!
//! Signature, expiry and audience checks happen in the verifier that decodes
//! the token; this module owns the rules applied to the decoded payload.

use serde::Deserialize;

use crate::error::CoreError;

/// A caller identity extracted from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
    /// Stable per-account identifier issued by the provider.
    pub subject: String,
}

/// Raw payload of a provider ID token (only the fields we consume).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderClaims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: Option<Flag>,
}

/// Some providers encode booleans as the strings `"true"`/`"false"`.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum Flag {
    Bool(bool),
    Text(TextFlag),
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFlag {
    True,
    False,
}

impl Flag {
    pub fn is_set(self) -> bool {
        matches!(self, Flag::Bool(true) | Flag::Text(TextFlag::True))
    }
}

impl ProviderClaims {
    /// Require a verified email and a subject.
    pub fn into_identity(self) -> Result<Identity, CoreError> {
        if !self.email_verified.is_some_and(Flag::is_set) {
            return Err(CoreError::Unauthorized("Email not verified".into()));
        }
        let email = self
            .email
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| CoreError::Unauthorized("Email not found in token".into()))?;
        let subject = self
            .sub
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| CoreError::Unauthorized("Subject not found in token".into()))?;
        Ok(Identity { email, subject })
    }
}
