// ABOUTME: Environment-based client configuration for reaching the recipe service
// ABOUTME: Parses and validates the base URL and optional transport timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::time::Duration;

use tracing::info;
use url::Url;

use crate::constants::{env_vars, http};
use crate::errors::{AppError, AppResult};

/// Settings needed to reach the recipe service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service base URL, always ending in `/`
    pub api_base_url: Url,
    /// Whole-request timeout; `None` keeps the transport default
    pub request_timeout: Option<Duration>,
    /// TCP connect timeout
    pub connect_timeout: Duration,
}

impl ClientConfig {
    /// Build a configuration for `base_url` with default timeouts
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if `base_url` is not an absolute http(s) URL
    pub fn new(base_url: &str) -> AppResult<Self> {
        Ok(Self {
            api_base_url: parse_base_url(base_url)?,
            request_timeout: None,
            connect_timeout: Duration::from_secs(http::DEFAULT_CONNECT_TIMEOUT_SECS),
        })
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when `RECIPE_API_URL` is unset and
    /// `ConfigInvalid` when any value fails to parse
    pub fn from_env() -> AppResult<Self> {
        let base_url = env::var(env_vars::API_URL).map_err(|_| {
            AppError::config_missing(format!("{} is not set", env_vars::API_URL))
        })?;
        Self::from_env_with_base_url(&base_url)
    }

    /// Load timeouts from the environment but take the base URL from the caller
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when the URL or a timeout value fails to parse
    pub fn from_env_with_base_url(base_url: &str) -> AppResult<Self> {
        let mut config = Self::new(base_url)?;
        config.request_timeout = optional_secs(env_vars::API_TIMEOUT_SECS)?;
        if let Some(connect) = optional_secs(env_vars::API_CONNECT_TIMEOUT_SECS)? {
            config.connect_timeout = connect;
        }

        info!(
            api.base_url = %config.api_base_url,
            api.timeout_secs = ?config.request_timeout.map(|t| t.as_secs()),
            api.connect_timeout_secs = config.connect_timeout.as_secs(),
            "Loaded recipe service configuration"
        );
        Ok(config)
    }
}

/// Parse and normalize the service base URL
///
/// A trailing `/` is appended so relative joins land beneath any path prefix
/// (`https://host/prod` + `recipes` = `https://host/prod/recipes`).
///
/// # Errors
///
/// Returns `ConfigInvalid` for unparsable, relative, or non-http(s) URLs
pub fn parse_base_url(raw: &str) -> AppResult<Url> {
    let trimmed = raw.trim();
    let mut url = Url::parse(trimmed).map_err(|e| {
        AppError::config_invalid(format!("Invalid {} '{trimmed}': {e}", env_vars::API_URL))
            .with_source(e)
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::config_invalid(format!(
            "{} must use http or https, got '{}'",
            env_vars::API_URL,
            url.scheme()
        )));
    }
    if url.cannot_be_a_base() {
        return Err(AppError::config_invalid(format!(
            "{} cannot be used as a base URL: {trimmed}",
            env_vars::API_URL
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

/// Read an optional whole-seconds duration
fn optional_secs(key: &str) -> AppResult<Option<Duration>> {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<u64>()
            .map(|secs| Some(Duration::from_secs(secs)))
            .map_err(|e| {
                AppError::config_invalid(format!("{key} must be a whole number of seconds: {e}"))
            }),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let url = parse_base_url("https://api.example.com/prod").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/prod/");
        assert_eq!(
            url.join("recipes").unwrap().as_str(),
            "https://api.example.com/prod/recipes"
        );
    }

    #[test]
    fn test_base_url_rejects_other_schemes() {
        let err = parse_base_url("ftp://example.com").unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid);
        assert!(parse_base_url("not a url").is_err());
        assert!(parse_base_url("/relative/path").is_err());
    }

    #[test]
    fn test_new_uses_transport_default_timeout() {
        let config = ClientConfig::new("http://localhost:3000").unwrap();
        assert_eq!(config.request_timeout, None);
        assert_eq!(
            config.connect_timeout,
            Duration::from_secs(http::DEFAULT_CONNECT_TIMEOUT_SECS)
        );
    }
}
