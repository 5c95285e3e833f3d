//! API server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                 | Default   |
//! |--------------------------|-----------|
//! | `REWARDS_BIND_ADDR`      | `0.0.0.0` |
//! | `REWARDS_PORT`           | `8080`    |
//! | `REWARDS_MAX_BODY_BYTES` | `1048576` |

use serde::{Deserialize, Serialize};
use std::env;

/// API server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to listen on
    pub bind_addr: String,

    /// HTTP port
    pub port: u16,

    /// Largest accepted request body in bytes (default: 1MB)
    pub max_body_bytes: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            bind_addr: "0.0.0.0".to_string(),
            port: 8080,
            max_body_bytes: 1024 * 1024,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key → value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = ApiConfig::default();

        let config = ApiConfig {
            bind_addr: lookup("REWARDS_BIND_ADDR").unwrap_or(defaults.bind_addr),

            port: match lookup("REWARDS_PORT") {
                Some(value) => value
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("REWARDS_PORT".to_string()))?,
                None => defaults.port,
            },

            max_body_bytes: match lookup("REWARDS_MAX_BODY_BYTES") {
                Some(value) => value
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("REWARDS_MAX_BODY_BYTES".to_string()))?,
                None => defaults.max_body_bytes,
            },
        };

        if config.bind_addr.trim().is_empty() {
            return Err(ConfigError::InvalidValue("REWARDS_BIND_ADDR".to_string()));
        }

        Ok(config)
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
