//! Error types for the library layer.

use std::fmt;

use crate::config::ConfigError;

/// Errors produced by the library layer, wrapping upstream API errors and
/// adding configuration, I/O and input validation failures.
#[derive(Debug)]
pub enum NewsProxyError {
    /// An error from the underlying API client.
    Api(gnews_api::Error),
    /// Required configuration is missing or malformed.
    Config(ConfigError),
    /// Binding or serving the listener failed.
    Io(std::io::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for NewsProxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Config(e) => write!(f, "Config error: {}", e),
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for NewsProxyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<gnews_api::Error> for NewsProxyError {
    fn from(e: gnews_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<ConfigError> for NewsProxyError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<std::io::Error> for NewsProxyError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
