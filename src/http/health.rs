//! Health and debug endpoints.
//!
//! # Responsibilities
//! - `GET /`: fixed liveness payload, independent of upstream reachability
//! - `GET /debug/info`: resolved runtime configuration for diagnosis
//!
//! # Design Decisions
//! - Liveness never probes upstream; it must stay cheap and always fast
//! - Debug info reports configuration only; the proxy holds no secrets

use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

use crate::http::server::AppState;

/// Role label reported by the liveness endpoint.
pub const PROXY_NAME: &str = "relay-proxy";

/// `GET /` — liveness.
pub async fn liveness() -> Json<Value> {
    Json(json!({
        "ok": true,
        "proxy": PROXY_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// `GET /debug/info` — the configuration currently in effect.
pub async fn debug_info(State(state): State<AppState>) -> Json<Value> {
    let config = state.config.as_ref();
    Json(json!({
        "proxy_name": PROXY_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "upstream_url": config.upstream_url,
        "listen_port": config.listen_port,
        "connect_timeout_sec": config.connect_timeout_secs,
        "upstream_timeout_sec": config.upstream_timeout_secs,
        "debug_log": config.debug_log,
        "stream_content_types": config.stream_detect.content_types,
    }))
}
