//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Record per-forward outcomes when debug logging is enabled
//!
//! # Design Decisions
//! - `RUST_LOG` always wins; the `DEBUG_LOG` flag only sets the default
//! - Outcome records carry method, path, stripped routing identifier,
//!   mode/outcome, status, latency

use std::time::Duration;

use axum::http::{Method, StatusCode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber. `debug_log` lowers the default
/// filter when `RUST_LOG` is unset.
pub fn init(debug_log: bool) {
    let default_filter = if debug_log {
        "relay_proxy=debug,tower_http=debug"
    } else {
        "relay_proxy=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Record the disposition of one forwarded request.
pub fn record_forward(
    enabled: bool,
    method: &Method,
    path: &str,
    client_id: Option<&str>,
    outcome: &str,
    status: Option<StatusCode>,
    latency: Duration,
) {
    if !enabled {
        return;
    }
    tracing::info!(
        target: "relay_proxy::forward",
        method = %method,
        path = %path,
        client_id = client_id,
        outcome = outcome,
        status = status.map(|s| s.as_u16()),
        latency_ms = latency.as_millis() as u64,
        "forwarded"
    );
}
