//! Route matching logic.
//!
//! # Responsibilities
//! - Recognize the direct API form (`/v1/...`), forwarded unchanged
//! - Recognize the prefixed form (`/{id}/v1/...`) and strip the identifier
//! - Reject everything else as an explicit no-match
//!
//! # Design Decisions
//! - Path matching is case-sensitive (URL paths are)
//! - The routing identifier is a single non-empty segment; it is carried on
//!   the Route for logging but never interpreted here
//! - `/` and `/debug/info` are owned by the server's own handlers and are
//!   rejected here so they can never leak upstream

/// Path prefix of the upstream API surface.
const API_PREFIX: &str = "/v1";

/// A matched route: the path to forward upstream, plus the routing
/// identifier that was stripped, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Opaque per-client identifier stripped from the prefixed form.
    pub client_id: Option<String>,

    /// Path to send upstream, always starting with the API prefix.
    pub upstream_path: String,
}

/// Map an incoming request path to an upstream path.
///
/// Returns `None` when the path matches neither the direct nor the
/// prefixed API form; callers answer 404 and never contact upstream.
pub fn match_path(path: &str) -> Option<Route> {
    if is_api_path(path) {
        return Some(Route {
            client_id: None,
            upstream_path: path.to_string(),
        });
    }

    // Prefixed form: /{id}/v1/... with a single non-empty opaque segment.
    let rest = path.strip_prefix('/')?;
    let (segment, remainder) = rest.split_once('/')?;
    if segment.is_empty() {
        return None;
    }
    let rewritten = format!("/{remainder}");
    if is_api_path(&rewritten) {
        return Some(Route {
            client_id: Some(segment.to_string()),
            upstream_path: rewritten,
        });
    }

    None
}

/// True for `/v1` exactly or any path below it.
fn is_api_path(path: &str) -> bool {
    path == API_PREFIX || path.starts_with("/v1/")
}
