//! Gateway error taxonomy.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when communicating with the donation service.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// HTTP transport failure (timeout, TLS, protocol).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// TCP connection could not be established.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// The server rejected the request.
    ///
    /// `message` is the optional human-readable reason supplied by the
    /// server; callers prefer it over their own fallback text.
    #[error("Remote error (status {status}): {}", message.as_deref().unwrap_or("no message"))]
    Remote {
        status: u16,
        message: Option<String>,
    },

    /// The response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl GatewayError {
    /// The server-supplied failure message, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            GatewayError::Remote { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
