use crate::app_config::{AppConfig, Environment};
use crate::geo::Coordinate;
use crate::ConfigError;

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
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can use a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_zoom = |var: &str, default: &str| -> Result<u8, ConfigError> {
        let raw = or_default(var, default);
        let zoom = raw.parse::<u8>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })?;
        if zoom > 22 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("zoom {zoom} is above the maximum of 22"),
            });
        }
        Ok(zoom)
    };

    let parse_degrees = |var: &str, default: &str, limit: f64| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        let value = raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })?;
        if !value.is_finite() || value.abs() > limit {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("{value} is outside [-{limit}, {limit}]"),
            });
        }
        Ok(value)
    };

    let api_base_url = require("ESTATE_API_BASE_URL")?;
    let env = parse_environment(&or_default("ESTATE_ENV", "development"))?;
    let log_level = or_default("ESTATE_LOG_LEVEL", "info");
    let http_timeout_secs = parse_u64("ESTATE_HTTP_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("ESTATE_USER_AGENT", "estate-map/0.1 (listing-discovery)");

    let map_center = Coordinate::new(
        parse_degrees("ESTATE_MAP_CENTER_LAT", "31.252973", 90.0)?,
        parse_degrees("ESTATE_MAP_CENTER_LNG", "34.791462", 180.0)?,
    );
    let map_zoom = parse_zoom("ESTATE_MAP_ZOOM", "13")?;
    let fly_to_zoom = parse_zoom("ESTATE_FLY_TO_ZOOM", "16")?;

    Ok(AppConfig {
        api_base_url,
        env,
        log_level,
        http_timeout_secs,
        user_agent,
        map_center,
        map_zoom,
        fly_to_zoom,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "ESTATE_ENV".to_string(),
            reason: format!("expected development, test, or production; got {other:?}"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
