//! Disk client implementation using reqwest.
//!
//! This adapter implements the `DiskClient` port using the reqwest library.
//! It handles all HTTP communication with the storage resource endpoint.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use diskcheck_application::ports::{DiskClient, HttpClientError};
use diskcheck_domain::{
    OAuthToken,
    request::{HttpMethod, ResourceRequest},
    response::ResponseSpec,
};
use reqwest::{Client, Method};
use tracing::debug;
use url::Url;

use crate::config::DiskConfig;

const USER_AGENT: &str = concat!("diskcheck/", env!("CARGO_PKG_VERSION"));

/// Disk client implementation using reqwest.
///
/// Every request goes to `{base_url}?path={path}` with the headers the
/// request resolves to against the configured token.
pub struct ReqwestDiskClient {
    client: Client,
    base_url: Url,
    token: OAuthToken,
    timeout: Option<Duration>,
}

impl ReqwestDiskClient {
    /// Creates a new client from configuration.
    ///
    /// Default configuration:
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - No request timeout unless configured
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new(config: &DiskConfig) -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
            timeout: config.timeout,
        })
    }

    /// Creates a client around a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client, base_url: Url, token: OAuthToken) -> Self {
        Self {
            client,
            base_url,
            token,
            timeout: None,
        }
    }

    /// Returns the URL a request for `path` is sent to.
    ///
    /// The path is form-encoded into the `path` query parameter, so `/`,
    /// `#`, `&` and `%` reach the service as part of the name.
    #[must_use]
    pub fn resource_url(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("path", path);
        url
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Maps reqwest errors to `HttpClientError`.
    fn map_error(&self, error: &reqwest::Error) -> HttpClientError {
        if error.is_timeout() {
            #[allow(clippy::cast_possible_truncation)]
            let timeout_ms = self.timeout.map_or(0, |t| t.as_millis() as u64);
            return HttpClientError::Timeout { timeout_ms };
        }

        if error.is_connect() {
            let message = error.to_string();
            let host = error
                .url()
                .and_then(Url::host_str)
                .unwrap_or("unknown")
                .to_string();
            let lower = message.to_lowercase();
            if lower.contains("dns") || lower.contains("resolve") {
                return HttpClientError::DnsError { host, message };
            }
            if lower.contains("refused") {
                return HttpClientError::ConnectionRefused {
                    host,
                    port: error
                        .url()
                        .and_then(Url::port_or_known_default)
                        .unwrap_or(443),
                };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return HttpClientError::Other(format!("too many redirects: {error}"));
        }

        HttpClientError::Other(error.to_string())
    }
}

#[async_trait]
impl DiskClient for ReqwestDiskClient {
    async fn execute(&self, request: &ResourceRequest) -> Result<ResponseSpec, HttpClientError> {
        let url = self.resource_url(&request.path);
        let start = Instant::now();

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        for header in request.headers(&self.token).iter() {
            builder = builder.header(&header.name, &header.value);
        }

        let response = builder.send().await.map_err(|e| self.map_error(&e))?;

        let duration = start.elapsed();
        let status = response.status().as_u16();

        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
            .collect();

        let body = response
            .bytes()
            .await
            .map_err(|e| HttpClientError::Body(e.to_string()))?;

        debug!(
            method = %request.method,
            path = ?request.path,
            auth = request.auth.label(),
            status,
            elapsed_ms = duration.as_millis(),
            "resource request completed"
        );

        Ok(ResponseSpec::new(status, headers, &body, duration))
    }
}
