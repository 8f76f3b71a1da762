//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request dispatch)
//!     → request.rs (stamp request ID)
//!     → health.rs (liveness / debug-info, never forwarded)
//!     → [routing matcher decides upstream path]
//!     → [relay engine forwards and pipes the response back]
//!     → response.rs (structured error bodies)
//! ```

pub mod health;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;
