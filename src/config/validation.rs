//! Configuration validation.
//!
//! Returns every problem found, not just the first. Runs before the config
//! is accepted into the system.

use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic problem with a [`GatewayConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("listener port must be non-zero")]
    ZeroPort,

    #[error("upstream base URL {url:?} is not a valid URL: {reason}")]
    InvalidUpstreamUrl { url: String, reason: String },

    #[error("upstream base URL {url:?} must use http or https")]
    UnsupportedScheme { url: String },

    #[error("upstream base URL {url:?} must not carry a query or fragment")]
    UnexpectedQuery { url: String },
}

/// Validate `config`, collecting all errors.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }

    let raw = &config.upstream.base_url;
    match Url::parse(raw) {
        Ok(url) => {
            if !matches!(url.scheme(), "http" | "https") {
                errors.push(ValidationError::UnsupportedScheme { url: raw.clone() });
            }
            if url.query().is_some() || url.fragment().is_some() {
                errors.push(ValidationError::UnexpectedQuery { url: raw.clone() });
            }
        }
        Err(e) => errors.push(ValidationError::InvalidUpstreamUrl {
            url: raw.clone(),
            reason: e.to_string(),
        }),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
