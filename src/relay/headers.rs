//! Header filtering for the relay path.
//!
//! # Responsibilities
//! - Strip hop-by-hop headers in both directions
//! - Strip framing headers (`Content-Length`, `Transfer-Encoding`) on the
//!   outbound request so the client library recomputes them
//! - Pass everything else through verbatim, `Authorization` included
//!
//! # Design Decisions
//! - Headers named by the `Connection` header are treated as hop-by-hop
//!   in addition to the fixed RFC 9110 set
//! - `Host` is rewritten by the outbound client for the upstream
//!   authority, so it is dropped here

use axum::http::header::{HeaderMap, HeaderName, CONNECTION, CONTENT_LENGTH, HOST};

/// Fixed hop-by-hop set (RFC 9110 §7.6.1).
const HOP_BY_HOP: &[&str] = &[
    "connection",
    "proxy-connection",
    "keep-alive",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

fn is_hop_by_hop(name: &HeaderName, connection_named: &[String]) -> bool {
    HOP_BY_HOP.contains(&name.as_str()) || connection_named.iter().any(|n| n == name.as_str())
}

/// Header names listed in the `Connection` header, lowercased.
fn connection_named(headers: &HeaderMap) -> Vec<String> {
    headers
        .get_all(CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(|t| t.trim().to_ascii_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Headers to send upstream: everything from the inbound request except
/// hop-by-hop, `Host`, and request framing.
pub fn outbound_headers(inbound: &HeaderMap) -> HeaderMap {
    let named = connection_named(inbound);
    let mut out = HeaderMap::with_capacity(inbound.len());
    for (name, value) in inbound {
        if name == HOST || name == CONTENT_LENGTH || is_hop_by_hop(name, &named) {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

/// Headers to relay back to the client: everything from the upstream
/// response except hop-by-hop. `Content-Length` is kept when present
/// since the body is relayed unmodified; the server stack re-frames
/// streamed bodies itself.
pub fn response_headers(upstream: &HeaderMap) -> HeaderMap {
    let named = connection_named(upstream);
    let mut out = HeaderMap::with_capacity(upstream.len());
    for (name, value) in upstream {
        if is_hop_by_hop(name, &named) {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}
