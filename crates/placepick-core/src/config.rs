//! Env-based client configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Connection settings shared by every backend: the API key, the request
/// timeout, and an optional base-URL override (used to point a backend at
/// a mock server).
#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub timeout_secs: u64,
    pub base_url: Option<String>,
}

impl ClientConfig {
    /// A config with the given API key and defaults for everything else.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            timeout_secs: 30,
            base_url: None,
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"[redacted]")
            .field("timeout_secs", &self.timeout_secs)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Load client configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env
/// vars.
///
/// # Errors
///
/// Returns `ConfigError` if `PLACEPICK_API_KEY` is missing or a value is
/// invalid.
pub fn load_config() -> Result<ClientConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_config_from_env()
}

/// Load client configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if `PLACEPICK_API_KEY` is missing or a value is
/// invalid.
pub fn load_config_from_env() -> Result<ClientConfig, ConfigError> {
    build_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
///
/// The parsing/validation logic is decoupled from the actual environment
/// so tests can drive it with a plain `HashMap` lookup.
fn build_config<F>(lookup: F) -> Result<ClientConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = lookup(var).unwrap_or_else(|_| default.to_string());
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_key = require("PLACEPICK_API_KEY")?;
    let timeout_secs = parse_u64("PLACEPICK_TIMEOUT_SECS", "30")?;
    let base_url = lookup("PLACEPICK_BASE_URL").ok();

    Ok(ClientConfig {
        api_key,
        timeout_secs,
        base_url,
    })
}
