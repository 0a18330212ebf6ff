//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The OAuth token is empty or contains characters not allowed in a header.
    #[error("invalid OAuth token: {0}")]
    InvalidToken(String),

    /// A scenario definition is malformed.
    #[error("invalid scenario '{name}': {reason}")]
    InvalidScenario {
        /// Scenario name.
        name: String,
        /// Why the scenario was rejected.
        reason: String,
    },
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
