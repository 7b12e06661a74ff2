mod app_config;
mod charger;
mod config;
pub mod query;

pub use app_config::AppConfig;
pub use charger::{NormalizedCharger, UNKNOWN_NAME, UNKNOWN_OPERATOR};
pub use config::{load_app_config, load_app_config_from_env, parse_country_code};
pub use query::{distinct_operators, distinct_powers, ChargerQuery};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
