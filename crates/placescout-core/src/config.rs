use crate::app_config::AppConfig;
use crate::rank::RankingPolicy;
use crate::ConfigError;

pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/";

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
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
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

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let places_api_key = require("PLACES_API_KEY")?;

    let log_level = or_default("PLACESCOUT_LOG_LEVEL", "info");
    let places_base_url = or_default("PLACESCOUT_PLACES_BASE_URL", DEFAULT_PLACES_BASE_URL);
    let request_timeout_secs = parse_u64("PLACESCOUT_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PLACESCOUT_USER_AGENT", "placescout/0.1 (merchant-explore)");

    let readiness_max_attempts = parse_u32("PLACESCOUT_READINESS_MAX_ATTEMPTS", "6")?;
    if readiness_max_attempts == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PLACESCOUT_READINESS_MAX_ATTEMPTS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    let readiness_interval_ms = parse_u64("PLACESCOUT_READINESS_INTERVAL_MS", "1000")?;
    let photo_max_width = parse_u32("PLACESCOUT_PHOTO_MAX_WIDTH", "400")?;

    let default_ranking = or_default("PLACESCOUT_DEFAULT_RANKING", "phone_first")
        .parse::<RankingPolicy>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "PLACESCOUT_DEFAULT_RANKING".to_string(),
            reason: e.to_string(),
        })?;

    Ok(AppConfig {
        log_level,
        places_api_key,
        places_base_url,
        request_timeout_secs,
        user_agent,
        readiness_max_attempts,
        readiness_interval_ms,
        photo_max_width,
        default_ranking,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
