use crate::app_config::AppConfig;
use crate::query::DEFAULT_QUERY_LIMIT;
use crate::ConfigError;

pub const DEFAULT_INPUT_PATH: &str = "./data/ocm_finland_raw.json";
pub const DEFAULT_OUTPUT_PATH: &str = "./data/chargers_normalized.json";
pub const DEFAULT_COUNTRY_CODE: &str = "FI";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
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
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; the defaults reproduce a plain run against
/// `./data/`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let input_path = PathBuf::from(or_default("CHARGEMAP_INPUT_PATH", DEFAULT_INPUT_PATH));
    let output_path = PathBuf::from(or_default("CHARGEMAP_OUTPUT_PATH", DEFAULT_OUTPUT_PATH));
    let log_level = or_default("CHARGEMAP_LOG_LEVEL", "info");

    let country_code =
        parse_country_code(&or_default("CHARGEMAP_COUNTRY_CODE", DEFAULT_COUNTRY_CODE))
            .map_err(|reason| invalid("CHARGEMAP_COUNTRY_CODE", reason))?;

    let sanitize_coords = parse_bool(&or_default("CHARGEMAP_SANITIZE_COORDS", "false"))
        .map_err(|reason| invalid("CHARGEMAP_SANITIZE_COORDS", reason))?;

    let query_limit = or_default("CHARGEMAP_QUERY_LIMIT", &DEFAULT_QUERY_LIMIT.to_string())
        .parse::<usize>()
        .map_err(|e| invalid("CHARGEMAP_QUERY_LIMIT", e.to_string()))?;
    if query_limit == 0 {
        return Err(invalid(
            "CHARGEMAP_QUERY_LIMIT",
            "must be greater than zero".to_string(),
        ));
    }

    Ok(AppConfig {
        input_path,
        output_path,
        country_code,
        sanitize_coords,
        query_limit,
        log_level,
    })
}

/// Validate an ISO 3166-1 alpha-2 code and return it upper-cased.
///
/// # Errors
///
/// Returns a human-readable reason when the value is not two ASCII letters.
pub fn parse_country_code(raw: &str) -> Result<String, String> {
    let code = raw.trim();
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(format!("expected a two-letter country code, got '{raw}'"))
    }
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        other => Err(format!("expected true or false, got '{other}'")),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
