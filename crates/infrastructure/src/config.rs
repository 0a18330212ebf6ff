//! Configuration loading.
//!
//! Settings come from the process environment, optionally seeded from a
//! `.env` file. Variables already present in the environment win over the
//! file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use diskcheck_application::CatalogueOptions;
use diskcheck_application::catalogue::{DEFAULT_LIFECYCLE_FOLDER, DEFAULT_TEST_FOLDER};
use diskcheck_domain::{DomainError, OAuthToken};
use thiserror::Error;
use url::Url;

/// Variable holding the OAuth token.
pub const TOKEN_VAR: &str = "YANDEX_DISK_TOKEN";
/// Variable overriding the resource endpoint.
pub const BASE_URL_VAR: &str = "DISKCHECK_BASE_URL";
/// Variable overriding the single-folder scenarios' target.
pub const TEST_FOLDER_VAR: &str = "DISKCHECK_TEST_FOLDER";
/// Variable overriding the lifecycle scenario's target.
pub const LIFECYCLE_FOLDER_VAR: &str = "DISKCHECK_LIFECYCLE_FOLDER";
/// Variable setting a per-request timeout in seconds.
pub const TIMEOUT_VAR: &str = "DISKCHECK_TIMEOUT_SECS";

/// Resource endpoint of the storage API.
pub const DEFAULT_BASE_URL: &str = "https://cloud-api.yandex.net/v1/disk/resources";

/// Errors raised while building configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The token variable is unset or blank.
    #[error("YANDEX_DISK_TOKEN is not set")]
    MissingToken,

    /// The token variable holds something that cannot be sent.
    #[error("YANDEX_DISK_TOKEN is invalid: {0}")]
    InvalidToken(#[source] DomainError),

    /// The base URL is not an http(s) URL.
    #[error("invalid base URL '{value}': {reason}")]
    InvalidBaseUrl {
        /// Offending value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The timeout is not a positive number of seconds.
    #[error("DISKCHECK_TIMEOUT_SECS must be a positive number of seconds, got '{0}'")]
    InvalidTimeout(String),

    /// A folder name variable is blank.
    #[error("{0} must not be empty")]
    EmptyFolder(&'static str),

    /// The env file could not be read.
    #[error("failed to load env file {path}: {message}")]
    EnvFile {
        /// File that was requested.
        path: PathBuf,
        /// Underlying error text.
        message: String,
    },
}

/// Runtime configuration, read once at start-up.
#[derive(Debug, Clone)]
pub struct DiskConfig {
    /// OAuth token sent with every request.
    pub token: OAuthToken,
    /// Resource endpoint.
    pub base_url: Url,
    /// Target of the single-folder scenarios.
    pub test_folder: String,
    /// Target of the lifecycle scenario.
    pub lifecycle_folder: String,
    /// Per-request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
}

impl DiskConfig {
    /// Builds configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is missing or a value is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is missing or a value is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_VAR)
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;
        let token = OAuthToken::new(token).map_err(ConfigError::InvalidToken)?;

        let base_url = parse_base_url(
            &lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        )?;

        let CatalogueOptions {
            test_folder,
            lifecycle_folder,
        } = folders_from_lookup(&lookup)?;

        let timeout = lookup(TIMEOUT_VAR)
            .map(|raw| parse_timeout(&raw))
            .transpose()?;

        Ok(Self {
            token,
            base_url,
            test_folder,
            lifecycle_folder,
            timeout,
        })
    }

    /// Replaces the resource endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if `url` is not an http(s) URL.
    pub fn with_base_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.base_url = parse_base_url(url)?;
        Ok(self)
    }

    /// Folder names for the scenario catalogue.
    #[must_use]
    pub fn catalogue_options(&self) -> CatalogueOptions {
        CatalogueOptions {
            test_folder: self.test_folder.clone(),
            lifecycle_folder: self.lifecycle_folder.clone(),
        }
    }
}

/// Reads only the folder variables. Needs no token.
///
/// # Errors
///
/// Returns an error if a folder variable is set but blank.
pub fn folders_from_env() -> Result<CatalogueOptions, ConfigError> {
    folders_from_lookup(&|key: &str| std::env::var(key).ok())
}

/// Reads only the folder variables from an arbitrary lookup.
///
/// # Errors
///
/// Returns an error if a folder variable is set but blank.
pub fn folders_from_lookup<F>(lookup: &F) -> Result<CatalogueOptions, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    Ok(CatalogueOptions {
        test_folder: folder(lookup, TEST_FOLDER_VAR, DEFAULT_TEST_FOLDER)?,
        lifecycle_folder: folder(lookup, LIFECYCLE_FOLDER_VAR, DEFAULT_LIFECYCLE_FOLDER)?,
    })
}

/// Loads variables from an env file into the process environment.
///
/// With `None`, looks for `.env` in the working directory and its parents
/// and silently does nothing if there is none. An explicit path must exist.
///
/// Returns the path of the file that was loaded.
///
/// # Errors
///
/// Returns an error if an explicit file is missing, or if any file found
/// cannot be parsed.
pub fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
    match path {
        Some(path) => dotenv::from_path(path)
            .map(|()| Some(path.to_path_buf()))
            .map_err(|e| ConfigError::EnvFile {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        None => match dotenv::dotenv() {
            Ok(found) => Ok(Some(found)),
            Err(e) if e.not_found() => Ok(None),
            Err(e) => Err(ConfigError::EnvFile {
                path: PathBuf::from(".env"),
                message: e.to_string(),
            }),
        },
    }
}

fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidBaseUrl {
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidBaseUrl {
            value: value.to_string(),
            reason: "scheme must be http or https".to_string(),
        });
    }
    if url.query().is_some() {
        return Err(ConfigError::InvalidBaseUrl {
            value: value.to_string(),
            reason: "must not carry a query string".to_string(),
        });
    }
    Ok(url)
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    let invalid = || ConfigError::InvalidTimeout(raw.to_string());
    match raw.trim().parse::<f64>() {
        Ok(secs) if secs > 0.0 => Duration::try_from_secs_f64(secs).map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

fn folder<F>(lookup: &F, key: &'static str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default.to_string()),
        Some(value) if value.trim().is_empty() => Err(ConfigError::EmptyFolder(key)),
        Some(value) => Ok(value.trim().to_string()),
    }
}
