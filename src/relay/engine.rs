//! The relay engine: issues the upstream call and pipes the result back.
//!
//! # Responsibilities
//! - Build the outbound request (method, filtered headers, streamed body)
//! - Issue it with bounded connect and total timeouts
//! - Decide streamed vs buffered relay, once, from the response headers
//! - Map transport failures onto the error taxonomy
//!
//! # Design Decisions
//! - One pooled TLS-capable client shared by all relays, built at startup
//! - Redirects are never followed; 3xx responses relay verbatim
//! - Inbound bodies stream straight through, never buffered or re-parsed
//! - In streaming mode each chunk read/write is a discrete await, so a
//!   slow client back-pressures the upstream read naturally

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE, TRANSFER_ENCODING};
use axum::http::{request, HeaderMap, Request, Response};

use crate::config::{ConfigError, ProxyConfig, StreamDetectConfig};
use crate::relay::error::RelayError;
use crate::relay::headers;
use crate::routing::Route;

/// How an upstream response is relayed to the client. Decided exactly
/// once per response, before any body bytes are consumed, and never
/// changed mid-response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayMode {
    /// Forward status and headers immediately, then copy body chunks as
    /// they arrive. No full-body buffering, arbitrary response length.
    Streamed,
    /// Read the complete body, then answer in one unit.
    Buffered,
}

impl RelayMode {
    /// Inspect upstream response headers against the configured rule.
    pub fn detect(headers: &HeaderMap, rule: &StreamDetectConfig) -> Self {
        if let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) {
            let content_type = content_type.to_ascii_lowercase();
            if rule
                .content_types
                .iter()
                .any(|prefix| content_type.starts_with(prefix.as_str()))
            {
                return RelayMode::Streamed;
            }
        }

        if rule.stream_when_length_unknown && !headers.contains_key(CONTENT_LENGTH) {
            return RelayMode::Streamed;
        }

        RelayMode::Buffered
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RelayMode::Streamed => "streamed",
            RelayMode::Buffered => "buffered",
        }
    }
}

/// Forwards requests to the configured upstream.
///
/// Holds the shared outbound connection pool; safe for concurrent use,
/// each relay acquires and releases a pooled connection independently.
pub struct RelayEngine {
    client: reqwest::Client,
    config: Arc<ProxyConfig>,
}

impl RelayEngine {
    /// Build the engine and its pooled upstream client.
    pub fn new(config: Arc<ProxyConfig>) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout())
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { client, config })
    }

    /// Forward one request along a matched route.
    ///
    /// On success the returned response carries the upstream status, the
    /// filtered upstream headers, and either the fully-buffered body or a
    /// live chunk stream. Dropping the returned future or response body
    /// cancels the upstream call.
    pub async fn forward(
        &self,
        route: &Route,
        request: Request<Body>,
    ) -> Result<(Response<Body>, RelayMode), RelayError> {
        let (parts, body) = request.into_parts();

        let url = compose_url(
            &self.config.upstream_url,
            &route.upstream_path,
            parts.uri.query(),
        );

        let has_body = inbound_has_body(&parts);
        let mut outbound = self
            .client
            .request(parts.method, url)
            .headers(headers::outbound_headers(&parts.headers))
            .timeout(self.config.upstream_timeout());
        if has_body {
            outbound = outbound.body(reqwest::Body::wrap_stream(body.into_data_stream()));
        }

        let upstream = outbound
            .send()
            .await
            .map_err(|e| RelayError::from_reqwest(e, self.config.upstream_timeout_secs))?;

        let status = upstream.status();
        let mode = RelayMode::detect(upstream.headers(), &self.config.stream_detect);
        let relayed_headers = headers::response_headers(upstream.headers());

        let body = match mode {
            RelayMode::Buffered => {
                // Still under the total timeout; nothing has been sent to
                // the client yet, so failures here map to clean errors.
                let bytes = upstream
                    .bytes()
                    .await
                    .map_err(|e| RelayError::from_reqwest(e, self.config.upstream_timeout_secs))?;
                Body::from(bytes)
            }
            // A mid-stream timeout or upstream error surfaces as a body
            // stream error and aborts the client connection; headers are
            // already gone, so no second status is attempted.
            RelayMode::Streamed => Body::from_stream(upstream.bytes_stream()),
        };

        let mut response = Response::new(body);
        *response.status_mut() = status;
        *response.headers_mut() = relayed_headers;
        Ok((response, mode))
    }
}

/// Join the upstream base, rewritten path, and original query string.
fn compose_url(base: &str, upstream_path: &str, query: Option<&str>) -> String {
    match query {
        Some(q) => format!("{base}{upstream_path}?{q}"),
        None => format!("{base}{upstream_path}"),
    }
}

/// Whether the inbound request carries a body worth streaming upstream.
fn inbound_has_body(parts: &request::Parts) -> bool {
    let declared_length = parts
        .headers
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .map(|v| v != "0")
        .unwrap_or(false);
    declared_length || parts.headers.contains_key(TRANSFER_ENCODING)
}
