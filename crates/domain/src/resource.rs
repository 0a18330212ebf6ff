//! Storage resource metadata.
//!
//! These are the parts of the resource endpoint's JSON bodies the harness
//! reads. Unknown fields are ignored.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a stored resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// A folder.
    Dir,
    /// A regular file.
    File,
}

impl ResourceKind {
    /// Returns the wire name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dir => "dir",
            Self::File => "file",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata returned by `GET {base}?path=...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceMeta {
    /// Resource name (last path segment).
    pub name: String,
    /// Full path, e.g. `disk:/test_folder`.
    #[serde(default)]
    pub path: String,
    /// Folder or file.
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<FixedOffset>>,
    /// Last modification time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<FixedOffset>>,
}

impl ResourceMeta {
    /// Returns true if this resource is a folder.
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        matches!(self.kind, ResourceKind::Dir)
    }
}

/// Error envelope the service returns with 4xx/5xx statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceError {
    /// Localised message.
    #[serde(default)]
    pub message: String,
    /// English description.
    #[serde(default)]
    pub description: String,
    /// Machine-readable error code, e.g. `UnauthorizedError`.
    pub error: String,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.description.is_empty() {
            write!(f, "{}", self.error)
        } else {
            write!(f, "{}: {}", self.error, self.description)
        }
    }
}
