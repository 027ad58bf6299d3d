//! Proxy configuration loaded from environment variables.

use std::env;

use thiserror::Error;

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;
/// Host used when `HOST` is unset.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Errors during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing or empty.
    #[error("missing required environment variable: {0}")]
    Missing(String),
    /// An environment variable is set but cannot be parsed.
    #[error("invalid value for {name}: {value}")]
    Invalid { name: String, value: String },
}

/// Runtime configuration for the proxy server.
///
/// The API key is only ever read here, on the server side; it is never sent
/// to browsing clients.
#[derive(Clone)]
pub struct ProxyConfig {
    /// Upstream API key (`GNEWS_API_KEY`).
    pub api_key: String,
    /// Address to bind (`HOST`).
    pub host: String,
    /// Port to listen on (`PORT`).
    pub port: u16,
    /// Upstream API root (`GNEWS_BASE_URL`).
    pub base_url: String,
}

impl std::fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("api_key", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ProxyConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key =
            non_empty("GNEWS_API_KEY").ok_or_else(|| ConfigError::Missing("GNEWS_API_KEY".into()))?;

        let port = match non_empty("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT".into(),
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            api_key,
            host: non_empty("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            base_url: non_empty("GNEWS_BASE_URL")
                .unwrap_or_else(|| gnews_api::DEFAULT_BASE_URL.to_string()),
        })
    }

    /// `host:port` string suitable for binding.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
