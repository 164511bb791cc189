use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so only malformed values are errors.
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

    let parse_positive = |var: &str, default: &str| -> Result<u64, ConfigError> {
        match parse_u64(var, default)? {
            0 => Err(invalid(var, "must be greater than zero".to_string())),
            n => Ok(n),
        }
    };

    let env = parse_environment(&or_default("DEALBOARD_ENV", "development"))?;
    let log_level = or_default("DEALBOARD_LOG_LEVEL", "info");

    let api_url = or_default(
        "DEALBOARD_API_URL",
        "https://sofia-supermarkets-api-proxy.stefan-bratanov.workers.dev/products",
    );
    if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
        return Err(invalid(
            "DEALBOARD_API_URL",
            format!("\"{api_url}\" is not an absolute http(s) URL"),
        ));
    }

    let request_timeout_secs = parse_u64("DEALBOARD_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("DEALBOARD_USER_AGENT", "dealboard/0.1 (grocery-offers)");
    let rotation_interval_secs = parse_positive("DEALBOARD_ROTATION_INTERVAL_SECS", "8")?;

    let top_deals_limit = usize::try_from(parse_positive("DEALBOARD_TOP_DEALS_LIMIT", "16")?)
        .map_err(|e| invalid("DEALBOARD_TOP_DEALS_LIMIT", e.to_string()))?;

    let display_width = or_default("DEALBOARD_DISPLAY_WIDTH", "1200")
        .parse::<u32>()
        .map_err(|e| invalid("DEALBOARD_DISPLAY_WIDTH", e.to_string()))?;

    Ok(AppConfig {
        env,
        log_level,
        api_url,
        request_timeout_secs,
        user_agent,
        rotation_interval_secs,
        top_deals_limit,
        display_width,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything but the three known names.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "DEALBOARD_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
