//! Forwarding-path error taxonomy.
//!
//! Every variant maps to a well-formed HTTP error response when nothing
//! has been sent to the client yet. Once streaming has started the
//! connection is terminated instead; a second status line is never sent.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors produced while routing or forwarding a single request.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Path matched neither the direct nor the prefixed API form.
    #[error("no route for path {0:?}")]
    NoRoute(String),

    /// Connection-level failure reaching upstream (DNS, connect, TLS).
    #[error("upstream unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// The configured total timeout elapsed before upstream responded
    /// or finished its body.
    #[error("upstream timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Any other transport failure mid-exchange.
    #[error("upstream transfer failed: {0}")]
    Transfer(#[source] reqwest::Error),
}

impl RelayError {
    /// Classify an outbound client error into the taxonomy.
    pub fn from_reqwest(err: reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            RelayError::Timeout {
                seconds: timeout_secs,
            }
        } else if err.is_connect() {
            RelayError::Unreachable(err)
        } else {
            RelayError::Transfer(err)
        }
    }

    /// Status code for the client-facing error response.
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::NoRoute(_) => StatusCode::NOT_FOUND,
            RelayError::Unreachable(_) => StatusCode::BAD_GATEWAY,
            RelayError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            RelayError::Transfer(_) => StatusCode::BAD_GATEWAY,
        }
    }
}
