//! HTTP Method enumeration

use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP methods understood by the resource endpoint.
///
/// The harness only creates, reads and removes folders, so only the three
/// methods backing those operations are modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// Read resource metadata.
    Get,
    /// Create a folder.
    Put,
    /// Remove a resource.
    Delete,
}

impl HttpMethod {
    /// Returns the method as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_method_serde_uppercase() {
        assert_eq!(
            serde_json::to_string(&HttpMethod::Delete).ok().as_deref(),
            Some(r#""DELETE""#)
        );
        let parsed: Option<HttpMethod> = serde_json::from_str(r#""PUT""#).ok();
        assert_eq!(parsed, Some(HttpMethod::Put));
    }
}
