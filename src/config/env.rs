//! Configuration loading from the process environment.

use crate::config::schema::{ProxyConfig, StreamDetectConfig};
use crate::config::validation::{validate_config, ValidationError};
use thiserror::Error;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error("failed to build upstream client: {0}")]
    Client(#[from] reqwest::Error),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ProxyConfig {
    /// Load and validate configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load from an arbitrary variable lookup. Split out so tests can
    /// supply variables without touching process-global state.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let upstream_url = lookup("UPSTREAM_SERVER_A")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .ok_or(ConfigError::Missing("UPSTREAM_SERVER_A"))?;

        let config = ProxyConfig {
            upstream_url,
            listen_port: parse_var(&lookup, "PORT", 8000)?,
            connect_timeout_secs: parse_var(&lookup, "CONNECT_TIMEOUT_SEC", 10)?,
            upstream_timeout_secs: parse_var(&lookup, "UPSTREAM_TIMEOUT_SEC", 60)?,
            debug_log: lookup("DEBUG_LOG").map(|v| parse_bool(&v)).unwrap_or(false),
            stream_detect: StreamDetectConfig {
                content_types: lookup("STREAM_CONTENT_TYPES")
                    .map(|v| {
                        v.split(',')
                            .map(|s| s.trim().to_ascii_lowercase())
                            .filter(|s| !s.is_empty())
                            .collect()
                    })
                    .unwrap_or_else(|| StreamDetectConfig::default().content_types),
                ..StreamDetectConfig::default()
            },
        };

        validate_config(&config).map_err(ConfigError::Validation)?;

        Ok(config)
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            value: raw,
            reason: e.to_string(),
        }),
    }
}

/// Boolean-ish parsing: `1`, `true`, `yes`, `on` (case-insensitive) enable.
fn parse_bool(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
