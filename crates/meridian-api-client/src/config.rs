//! Dashboard API client configuration.
//!
//! Configures the base URL and request timeout. Defaults point at a local
//! development server. Override via environment variables or explicit
//! construction for staging/testing.

use url::Url;

/// Configuration for connecting to the dashboard API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the dashboard, e.g. `https://dashboard.example.com`.
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `MERIDIAN_API_URL` (default: `http://127.0.0.1:3000`)
    /// - `MERIDIAN_API_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env_url("MERIDIAN_API_URL", "http://127.0.0.1:3000")?,
            timeout_secs: std::env::var("MERIDIAN_API_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        })
    }

    /// Create a configuration for an explicit base URL with a short
    /// timeout, for tests and tooling.
    pub fn for_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            timeout_secs: 5,
        }
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A URL variable did not parse.
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}
