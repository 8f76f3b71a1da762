//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → env.rs (read & parse variables)
//!     → validation.rs (semantic checks)
//!     → ProxyConfig (validated, immutable)
//!     → shared via Arc to server and relay engine
//! ```
//!
//! # Design Decisions
//! - Environment is the only configuration source; no files, no reload
//! - Config is read once at startup and frozen; handlers never mutate it
//! - Validation separates syntactic (parse) from semantic checks
//! - A missing or invalid upstream URL is fatal before the listener binds

pub mod env;
pub mod schema;
pub mod validation;

pub use env::ConfigError;
pub use schema::{ProxyConfig, StreamDetectConfig};
