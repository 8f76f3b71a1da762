//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!
//! Consumers:
//!     → stdout (pretty format), filtered by RUST_LOG or the debug flag
//! ```
//!
//! # Design Decisions
//! - Structured logging only; the request ID ties log lines together
//! - Forward-outcome records are plain log events, off the data path:
//!   they never block or alter the relay

pub mod logging;
