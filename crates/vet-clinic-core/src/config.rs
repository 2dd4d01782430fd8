//! Client configuration.
//!
//! The backend base URL comes from deployment configuration. Hosts either
//! build a [`ClientConfig`] explicitly or read it from the environment.

use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

/// Environment variable holding the backend base URL.
pub const API_URL_ENV: &str = "VET_CLINIC_API_URL";

/// Environment variable holding an optional request timeout in seconds.
pub const TIMEOUT_ENV: &str = "VET_CLINIC_TIMEOUT_SECS";

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("missing env: {0}")]
    Missing(String),

    #[error("invalid base URL {value:?}: {reason}")]
    InvalidUrl { value: String, reason: String },

    #[error("invalid timeout {0:?}: expected whole seconds")]
    InvalidTimeout(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Where and how to reach the clinic backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: Url,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a configuration for the given base URL.
    pub fn new(base_url: &str) -> ConfigResult<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeout: None,
        })
    }

    /// Set a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Read configuration from `VET_CLINIC_API_URL` and `VET_CLINIC_TIMEOUT_SECS`.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(API_URL_ENV)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ConfigError::Missing(API_URL_ENV.to_string()))?;

        let mut config = Self::new(&base_url)?;
        if let Some(raw) = lookup(TIMEOUT_ENV).filter(|value| !value.trim().is_empty()) {
            config.timeout = Some(parse_timeout_secs(&raw)?);
        }

        Ok(config)
    }
}

/// Parse and validate a backend base URL.
pub fn parse_base_url(raw: &str) -> ConfigResult<Url> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|e| ConfigError::InvalidUrl {
        value: trimmed.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl {
            value: trimmed.to_string(),
            reason: format!("unsupported scheme {}", url.scheme()),
        });
    }
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl {
            value: trimmed.to_string(),
            reason: "URL cannot be a base".to_string(),
        });
    }

    Ok(url)
}

/// Parse a timeout given in whole seconds. Zero is rejected.
pub fn parse_timeout_secs(raw: &str) -> ConfigResult<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_new_config() {
        let config = ClientConfig::new("http://localhost:3000/api").unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:3000/api");
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert!(matches!(
            ClientConfig::new("not a url"),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            ClientConfig::new("ftp://clinic.example"),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            ClientConfig::new("mailto:vet@clinic.example"),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_from_lookup() {
        let config = ClientConfig::from_lookup(lookup(&[
            (API_URL_ENV, "https://clinic.example/api/"),
            (TIMEOUT_ENV, "15"),
        ]))
        .unwrap();

        assert_eq!(config.base_url.as_str(), "https://clinic.example/api/");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_from_lookup_missing_url() {
        let err = ClientConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(API_URL_ENV.to_string()));
    }

    #[test]
    fn test_invalid_timeout() {
        let result = ClientConfig::from_lookup(lookup(&[
            (API_URL_ENV, "http://localhost:3000"),
            (TIMEOUT_ENV, "soon"),
        ]));
        assert_eq!(result, Err(ConfigError::InvalidTimeout("soon".into())));
        assert!(parse_timeout_secs("0").is_err());
    }
}
