use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://brandpeek-22360-default-rtdb.firebaseio.com/";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_USER_AGENT: &str = "brandpeek/0.1 (brand-ranking)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("BRANDPEEK_ENV", "development"))?;

    let base_url = or_default("BRANDPEEK_BASE_URL", DEFAULT_BASE_URL);
    if base_url.trim().is_empty() {
        return Err(invalid("BRANDPEEK_BASE_URL", "must not be empty".to_string()));
    }

    let request_timeout_ms = parse_u64(
        "BRANDPEEK_REQUEST_TIMEOUT_MS",
        &DEFAULT_REQUEST_TIMEOUT_MS.to_string(),
    )?;
    if request_timeout_ms == 0 {
        return Err(invalid(
            "BRANDPEEK_REQUEST_TIMEOUT_MS",
            "must be greater than zero".to_string(),
        ));
    }

    let top_limit = parse_usize("BRANDPEEK_TOP_LIMIT", "10")?;
    if top_limit == 0 {
        return Err(invalid(
            "BRANDPEEK_TOP_LIMIT",
            "must be at least 1".to_string(),
        ));
    }

    let user_agent = or_default("BRANDPEEK_USER_AGENT", DEFAULT_USER_AGENT);
    let log_level = or_default("BRANDPEEK_LOG_LEVEL", env.default_log_level());

    Ok(AppConfig {
        env,
        base_url,
        request_timeout_ms,
        user_agent,
        log_level,
        top_limit,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "BRANDPEEK_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
