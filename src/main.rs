//! Transparent HTTP forwarding proxy.
//!
//! Terminates client connections nearby and relays traffic 1:1 to a
//! distant upstream API, preserving streaming semantics end-to-end.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │               FORWARDING PROXY                │
//!                    │                                               │
//!   Client Request   │  ┌─────────┐   ┌──────────┐   ┌───────────┐  │
//!   ─────────────────┼─▶│  http   │──▶│ routing  │──▶│   relay   │──┼──▶ Upstream
//!                    │  │ server  │   │ matcher  │   │  engine   │  │     API
//!   Client Response  │  └─────────┘   └──────────┘   └─────┬─────┘  │
//!   ◀────────────────┼────────────────────────────────────┘         │
//!                    │     (streamed chunk-by-chunk or buffered)     │
//!                    │                                               │
//!                    │  ┌─────────────────────────────────────────┐  │
//!                    │  │ config · observability · lifecycle      │  │
//!                    │  └─────────────────────────────────────────┘  │
//!                    └──────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;

use relay_proxy::config::ProxyConfig;
use relay_proxy::lifecycle::Shutdown;
use relay_proxy::observability::logging;
use relay_proxy::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Startup-time configuration errors are fatal: no listener binds.
    let config = ProxyConfig::from_env()?;

    logging::init(config.debug_log);

    tracing::info!(
        upstream = %config.upstream_url,
        listen_port = config.listen_port,
        connect_timeout_secs = config.connect_timeout_secs,
        upstream_timeout_secs = config.upstream_timeout_secs,
        debug_log = config.debug_log,
        "configuration loaded"
    );

    let listener = TcpListener::bind(("0.0.0.0", config.listen_port)).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
