use thiserror::Error;

use crate::app_config::AppConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingEnvVar(String),
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let source_url = require("VENUEMAP_SOURCE_URL")?;

    let bind_addr = or_default("VENUEMAP_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "VENUEMAP_BIND_ADDR".to_string(),
            reason: e.to_string(),
        })?;

    let log_level = or_default("VENUEMAP_LOG_LEVEL", "info");

    let fetch_timeout_secs = or_default("VENUEMAP_FETCH_TIMEOUT_SECS", "30")
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "VENUEMAP_FETCH_TIMEOUT_SECS".to_string(),
            reason: e.to_string(),
        })?;

    let user_agent = or_default("VENUEMAP_USER_AGENT", "venuemap/0.1 (location-map)");

    Ok(AppConfig {
        source_url,
        bind_addr,
        log_level,
        fetch_timeout_secs,
        user_agent,
    })
}
