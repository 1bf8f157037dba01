//! Gateway configuration with validation.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration errors reported by [`GatewayConfig::validate`].
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Base URL is empty or not an http(s) URL.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// A timeout was set to zero.
    #[error("Invalid timeout: {0}")]
    InvalidTimeout(String),
}

/// Gateway client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Base URL of the donation service, e.g. `http://localhost:8080/api`.
    pub base_url: String,
    /// Overall request timeout.
    pub timeout: Duration,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(2),
        }
    }
}

impl GatewayConfig {
    /// Create a configuration for the given base URL with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::InvalidBaseUrl("base URL cannot be empty".into()));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidBaseUrl(format!(
                "base URL must start with http:// or https://, got {url}"
            )));
        }

        if self.timeout.as_millis() == 0 {
            return Err(ConfigError::InvalidTimeout("timeout cannot be 0".into()));
        }
        if self.connect_timeout.as_millis() == 0 {
            return Err(ConfigError::InvalidTimeout(
                "connect_timeout cannot be 0".into(),
            ));
        }

        Ok(())
    }

    /// Base URL with any trailing slash removed, for path joining.
    pub fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
