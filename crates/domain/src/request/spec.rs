//! Resource request specification type

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Header, Headers, HttpMethod};
use crate::auth::{AuthMode, OAuthToken};

/// Content type sent with every request.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// One call to the resource endpoint: `{method} {base}?path={path}`.
///
/// The path is kept verbatim. Empty paths, nested paths and names with
/// reserved characters are all legitimate inputs; it is up to the service
/// to accept or reject them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Value of the `path` query parameter
    pub path: String,
    /// Credentials to send
    #[serde(default)]
    pub auth: AuthMode,
}

impl ResourceRequest {
    /// Creates a request with the configured credentials.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            auth: AuthMode::Configured,
        }
    }

    /// `PUT`: create a folder at `path`.
    #[must_use]
    pub fn create(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    /// `GET`: read metadata of `path`.
    #[must_use]
    pub fn read(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// `DELETE`: remove `path`.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Replaces the credentials (builder pattern).
    #[must_use]
    pub fn with_auth(mut self, auth: AuthMode) -> Self {
        self.auth = auth;
        self
    }

    /// Resolves the headers to send, given the configured token.
    #[must_use]
    pub fn headers(&self, configured: &OAuthToken) -> Headers {
        let mut headers = Headers::new();
        if let Some(value) = self.auth.header_value(configured) {
            headers.set(Header::new("Authorization", value));
        }
        headers.set(Header::new("Content-Type", JSON_CONTENT_TYPE));
        headers
    }
}

impl fmt::Display for ResourceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} path={:?}", self.method, self.path)
    }
}
