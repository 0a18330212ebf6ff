//! Disk client port

use async_trait::async_trait;
use diskcheck_domain::{request::ResourceRequest, response::ResponseSpec};
use thiserror::Error;

/// Errors raised when a request cannot be completed.
///
/// A response with any status code, 4xx and 5xx included, is not an error
/// at this level; only transport failures are.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HttpClientError {
    /// The request exceeded the configured timeout.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// Timeout that was exceeded.
        timeout_ms: u64,
    },

    /// The host name could not be resolved.
    #[error("could not resolve host '{host}': {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Underlying error text.
        message: String,
    },

    /// The server refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// Any other connection failure (TLS, reset, ...).
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),

    /// Anything else.
    #[error("{0}")]
    Other(String),
}

/// Port for talking to the storage resource endpoint.
///
/// Implementations add the `Authorization` and `Content-Type` headers the
/// request resolves to and return whatever status the service answers.
#[async_trait]
pub trait DiskClient: Send + Sync {
    /// Sends one request and returns the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be completed. Error
    /// statuses are returned as `Ok` responses.
    async fn execute(&self, request: &ResourceRequest) -> Result<ResponseSpec, HttpClientError>;
}
