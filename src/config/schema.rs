//! Configuration schema definitions.
//!
//! All types derive Serde traits so the resolved configuration can be
//! reported verbatim by the `/debug/info` endpoint.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration for the forwarding proxy.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// Upstream base URL (absolute http/https, no trailing slash).
    pub upstream_url: String,

    /// Listen port for inbound client connections.
    pub listen_port: u16,

    /// TCP/TLS connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,

    /// Total per-request upstream timeout in seconds (headers plus body).
    pub upstream_timeout_secs: u64,

    /// Emit a per-forward outcome record (method, path, status, latency).
    pub debug_log: bool,

    /// Streaming relay detection rule.
    pub stream_detect: StreamDetectConfig,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            upstream_url: String::new(),
            listen_port: 8000,
            connect_timeout_secs: 10,
            upstream_timeout_secs: 60,
            debug_log: false,
            stream_detect: StreamDetectConfig::default(),
        }
    }
}

impl ProxyConfig {
    /// Connect timeout as a [`Duration`].
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Total upstream timeout as a [`Duration`].
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}

/// Rule deciding which upstream responses are relayed in streaming mode.
///
/// Upstream APIs vary in how they signal incremental responses, so the
/// signal is configuration rather than a hard-coded media type.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StreamDetectConfig {
    /// Media-type prefixes that select streaming relay (e.g.
    /// `text/event-stream`). Matched case-insensitively against the
    /// response `Content-Type`, parameters ignored.
    pub content_types: Vec<String>,

    /// Treat a response without a declared `Content-Length` as streamed.
    pub stream_when_length_unknown: bool,
}

impl Default for StreamDetectConfig {
    fn default() -> Self {
        Self {
            content_types: vec!["text/event-stream".to_string()],
            stream_when_length_unknown: true,
        }
    }
}
