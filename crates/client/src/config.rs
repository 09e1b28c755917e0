//! Client configuration.
//!
//! One required value: the API base URL. Its absence is a startup error,
//! not something to limp along without.

use thiserror::Error;
use url::Url;

/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "PIVOTERP_API_URL";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{API_URL_ENV} is not set; the API base URL is required at startup")]
    MissingApiUrl,

    #[error("invalid API base URL '{0}': {1}")]
    InvalidApiUrl(String, String),
}

/// Startup configuration for the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_base_url: Url,
}

impl ClientConfig {
    pub fn new(api_base_url: Url) -> Self {
        Self { api_base_url }
    }

    /// Read configuration from the environment, failing fast when the
    /// base URL is missing or unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(std::env::var(API_URL_ENV).ok())
    }

    fn from_lookup(value: Option<String>) -> Result<Self, ConfigError> {
        let raw = value.filter(|v| !v.trim().is_empty()).ok_or(ConfigError::MissingApiUrl)?;

        let url = Url::parse(raw.trim())
            .map_err(|e| ConfigError::InvalidApiUrl(raw.clone(), e.to_string()))?;

        Ok(Self::new(url))
    }

    pub fn api_base_url(&self) -> &Url {
        &self.api_base_url
    }

    /// Base URL as a string without a trailing slash, ready for joining
    /// endpoint paths onto.
    pub fn api_base(&self) -> String {
        self.api_base_url.as_str().trim_end_matches('/').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_is_fatal() {
        assert_eq!(ClientConfig::from_lookup(None), Err(ConfigError::MissingApiUrl));
        assert_eq!(
            ClientConfig::from_lookup(Some("   ".to_string())),
            Err(ConfigError::MissingApiUrl)
        );
    }

    #[test]
    fn garbage_url_is_fatal() {
        let err = ClientConfig::from_lookup(Some("not a url".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidApiUrl(raw, _) if raw == "not a url"));
    }

    #[test]
    fn valid_url_parses_and_base_has_no_trailing_slash() {
        let cfg = ClientConfig::from_lookup(Some("http://erp.example.com:8080/".to_string())).unwrap();
        assert_eq!(cfg.api_base(), "http://erp.example.com:8080");
    }
}
