// web_app/api/config.rs - Upstream catalog configuration
//
// The catalog service location is injected through the environment so the
// same build runs against any deployment.

use reqwest::Url;
use std::env;
use std::time::Duration;
use thiserror::Error;

pub const API_URL_VAR: &str = "STOREFRONT_API_URL";
pub const TIMEOUT_VAR: &str = "STOREFRONT_REQUEST_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid catalog base URL '{value}': {reason}")]
    InvalidUrl { value: String, reason: String },
    #[error("catalog base URL '{0}' cannot carry a path")]
    NotABase(String),
    #[error("invalid request timeout '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),
}

/// Where and how the server reaches the catalog service
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorefrontConfig {
    api_base_url: Url,
    products_url: Url,
    request_timeout: Duration,
}

impl StorefrontConfig {
    /// Build a config for `base_url` with the default timeout
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let mut api_base_url = Url::parse(base_url).map_err(|e| invalid_url(base_url, e))?;
        if api_base_url.cannot_be_a_base() {
            return Err(ConfigError::NotABase(base_url.to_string()));
        }
        // Url::join replaces the last segment unless the path ends in '/'
        if !api_base_url.path().ends_with('/') {
            let path = format!("{}/", api_base_url.path());
            api_base_url.set_path(&path);
        }

        let products_url = api_base_url
            .join("products")
            .map_err(|e| invalid_url(base_url, e))?;

        Ok(Self {
            api_base_url,
            products_url,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Read `STOREFRONT_API_URL` and `STOREFRONT_REQUEST_TIMEOUT_SECS`,
    /// falling back to the defaults when unset
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let config = Self::new(&base_url)?;

        match env::var(TIMEOUT_VAR) {
            Ok(raw) => Ok(config.with_timeout(parse_timeout(&raw)?)),
            Err(_) => Ok(config),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn api_base_url(&self) -> &Url {
        &self.api_base_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// `GET` target for the product list
    pub fn products_url(&self) -> &Url {
        &self.products_url
    }
}

fn invalid_url(value: &str, reason: impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidUrl {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = StorefrontConfig::new(DEFAULT_API_URL).unwrap();
        assert_eq!(config.products_url().as_str(), "http://localhost:5000/products");
        assert_eq!(config.request_timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_base_path_prefix_is_preserved() {
        let config = StorefrontConfig::new("https://shop.example/api/v1").unwrap();
        assert_eq!(config.products_url().as_str(), "https://shop.example/api/v1/products");

        let config = StorefrontConfig::new("https://shop.example/api/v1/").unwrap();
        assert_eq!(config.products_url().as_str(), "https://shop.example/api/v1/products");
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let err = StorefrontConfig::new("not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));

        let err = StorefrontConfig::new("mailto:shop@example.com").unwrap_err();
        assert!(matches!(err, ConfigError::NotABase(_)));
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout("3").unwrap(), Duration::from_secs(3));
        assert_eq!(parse_timeout(" 30 ").unwrap(), Duration::from_secs(30));
        assert!(parse_timeout("0").is_err());
        assert!(parse_timeout("-1").is_err());
        assert!(parse_timeout("soon").is_err());
    }
}
