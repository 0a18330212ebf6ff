//! Authentication types
//!
//! The storage API authenticates with `Authorization: OAuth <token>`.
//! Scenarios can send the configured token, an explicit token, or no
//! Authorization header at all.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DomainError, DomainResult};

/// Prefix the storage API expects in front of the token.
pub const OAUTH_SCHEME: &str = "OAuth";

/// An OAuth token.
///
/// `Debug` and `Display` never print the secret.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OAuthToken(String);

impl OAuthToken {
    /// Wraps a token after checking it can be sent in a header.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidToken` if the token is blank or
    /// contains control characters or whitespace.
    pub fn new(token: impl Into<String>) -> DomainResult<Self> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidToken("token is empty".to_string()));
        }
        if trimmed
            .chars()
            .any(|c| c.is_control() || c.is_whitespace())
        {
            return Err(DomainError::InvalidToken(
                "token contains whitespace or control characters".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the full `Authorization` header value.
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("{OAUTH_SCHEME} {}", self.0)
    }
}

impl fmt::Debug for OAuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OAuthToken(***)")
    }
}

impl fmt::Display for OAuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Which credentials a request carries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "token", rename_all = "snake_case")]
pub enum AuthMode {
    /// Use the token from configuration.
    #[default]
    Configured,
    /// Send no Authorization header.
    Missing,
    /// Send this token instead of the configured one.
    Override(OAuthToken),
}

impl AuthMode {
    /// Resolves the `Authorization` header value for this mode.
    ///
    /// Returns `None` when no header should be sent.
    #[must_use]
    pub fn header_value(&self, configured: &OAuthToken) -> Option<String> {
        match self {
            Self::Configured => Some(configured.header_value()),
            Self::Missing => None,
            Self::Override(token) => Some(token.header_value()),
        }
    }

    /// Short label for logs and listings.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Configured => "configured token",
            Self::Missing => "no auth",
            Self::Override(_) => "explicit token",
        }
    }
}
