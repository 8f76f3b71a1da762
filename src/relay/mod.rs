//! Relay subsystem: the forwarding core of the proxy.
//!
//! # Data Flow
//! ```text
//! Matched route + inbound request
//!     → headers.rs (strip hop-by-hop, pass the rest verbatim)
//!     → engine.rs (issue upstream call, bounded timeout)
//!     → RelayMode::detect (streamed vs buffered, decided once)
//!     → response relayed to client (chunk-by-chunk or as one unit)
//! ```
//!
//! # Design Decisions
//! - Payload-agnostic: bodies are never parsed, validated, or rewritten
//! - The streamed/buffered choice is an explicit two-variant enum fixed
//!   at the moment response headers are inspected
//! - No automatic retries; every failure surfaces exactly once
//! - Dropping the relay future cancels the in-flight upstream call, so a
//!   client disconnect releases the upstream connection promptly

pub mod engine;
pub mod error;
pub mod headers;

pub use engine::{RelayEngine, RelayMode};
pub use error::RelayError;
