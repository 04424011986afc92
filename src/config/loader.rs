//! Configuration loading from the process environment.

use thiserror::Error;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable holding the listen port.
pub const PORT_VAR: &str = "PORT";

/// Environment variable overriding the upstream base URL.
pub const UPSTREAM_URL_VAR: &str = "UPSTREAM_URL";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from the process environment.
pub fn load_from_env() -> Result<GatewayConfig, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// Load configuration using `lookup` as the variable source.
///
/// Empty values count as unset.
pub fn load_from<F>(lookup: F) -> Result<GatewayConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = GatewayConfig::default();
    let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(value) = var(PORT_VAR) {
        config.listener.port = value
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidPort { value, source })?;
    }

    if let Some(url) = var(UPSTREAM_URL_VAR) {
        config.upstream.base_url = url;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
