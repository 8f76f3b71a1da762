//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (parsing handles syntactic)
//! - Check the upstream URL is a well-formed absolute http(s) URL
//! - Validate value ranges (timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ProxyConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use crate::config::schema::ProxyConfig;
use thiserror::Error;
use url::Url;

/// A single semantic configuration error.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("upstream URL {0:?} is not a well-formed absolute URL")]
    UpstreamUrlMalformed(String),

    #[error("upstream URL scheme {0:?} is not http or https")]
    UpstreamScheme(String),

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("streaming detection has no content types and length-unknown detection disabled")]
    NoStreamSignal,
}

/// Validate a configuration, collecting every violation.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.upstream_url) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                errors.push(ValidationError::UpstreamScheme(url.scheme().to_string()));
            }
        }
        Err(_) => errors.push(ValidationError::UpstreamUrlMalformed(
            config.upstream_url.clone(),
        )),
    }

    if config.connect_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("CONNECT_TIMEOUT_SEC"));
    }
    if config.upstream_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("UPSTREAM_TIMEOUT_SEC"));
    }

    if config.stream_detect.content_types.is_empty()
        && !config.stream_detect.stream_when_length_unknown
    {
        errors.push(ValidationError::NoStreamSignal);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
