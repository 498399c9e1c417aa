//! Runtime configuration for the checker.

use std::time::Duration;
use thiserror::Error;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Runtime configuration, sourced from the environment.
///
/// The endpoint list itself is fixed; only the target server and the
/// per-request timeout can be overridden.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Base URL of the API server under test.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            timeout: Duration::from_secs(25),
        }
    }
}

impl CheckConfig {
    /// Loads configuration from the environment.
    ///
    /// `API_BASE_URL` overrides the target server and
    /// `API_CHECK_TIMEOUT_SECS` the per-request timeout; both fall back to
    /// the defaults when unset.
    ///
    /// # Errors
    /// Returns error if an override is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("API_BASE_URL").ok().as_deref(),
            std::env::var("API_CHECK_TIMEOUT_SECS").ok().as_deref(),
        )
    }

    /// Builds configuration from raw override values.
    ///
    /// # Errors
    /// Returns error if an override is present but invalid.
    pub fn from_values(
        base_url: Option<&str>,
        timeout_secs: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = base_url {
            if url.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "API_BASE_URL cannot be empty".to_string(),
                ));
            }
            config.base_url = url.to_string();
        }

        if let Some(raw) = timeout_secs {
            let secs: u64 = raw.parse().map_err(|_| {
                ConfigError::InvalidValue(format!(
                    "API_CHECK_TIMEOUT_SECS must be a positive integer, got {raw:?}"
                ))
            })?;
            if secs == 0 {
                return Err(ConfigError::InvalidValue(
                    "API_CHECK_TIMEOUT_SECS must be positive".to_string(),
                ));
            }
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
