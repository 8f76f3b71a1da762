//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → matcher.rs (recognize direct or prefixed API form)
//!     → Return: Route (rewritten upstream path) or NoMatch
//! ```
//!
//! # Design Decisions
//! - Pure path-string matching, computed fresh per request, no state
//! - No regex in the hot path (segment splitting only)
//! - Explicit NoMatch (404) rather than forwarding unrecognized paths
//! - The routing identifier is opaque: stripped, never validated

pub mod matcher;

pub use matcher::{match_path, Route};
