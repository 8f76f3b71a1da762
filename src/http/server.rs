//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum router with health, debug, and relay handlers
//! - Wire up middleware (tracing, request ID)
//! - Serve with graceful shutdown
//! - Dispatch API-form paths through the route matcher to the relay engine
//!
//! # Design Decisions
//! - `/` and `/debug/info` are registered routes; everything else falls
//!   through to the relay handler, which answers 404 for unmatched paths
//! - One handler task per connection; the only shared state is the frozen
//!   config and the pooled relay engine
//! - A client disconnect drops the handler future, cancelling the
//!   in-flight upstream call

use std::sync::Arc;
use std::time::Instant;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, ProxyConfig};
use crate::http::request::RequestIdLayer;
use crate::http::{health, response};
use crate::lifecycle::signals;
use crate::observability::logging;
use crate::relay::{RelayEngine, RelayError};
use crate::routing;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ProxyConfig>,
    pub engine: Arc<RelayEngine>,
}

/// HTTP server for the forwarding proxy.
pub struct HttpServer {
    router: Router,
    config: Arc<ProxyConfig>,
}

impl HttpServer {
    /// Create a new server; builds the relay engine and its client pool.
    pub fn new(config: ProxyConfig) -> Result<Self, ConfigError> {
        let config = Arc::new(config);
        let engine = Arc::new(RelayEngine::new(config.clone())?);
        let state = AppState {
            config: config.clone(),
            engine,
        };
        let router = Self::build_router(state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        // Reserved paths get explicit routes; non-GET methods on them are
        // a routing failure like any other unmatched request.
        Router::new()
            .route("/", get(health::liveness).fallback(reserved_path_fallback))
            .route(
                "/debug/info",
                get(health::debug_info).fallback(reserved_path_fallback),
            )
            .fallback(relay_handler)
            .with_state(state)
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown signal fires or a termination
    /// signal arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, upstream = %self.config.upstream_url, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown.recv() => {}
                    _ = signals::terminate() => {}
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }
}

async fn reserved_path_fallback(request: Request<Body>) -> Response {
    response::error_response(
        StatusCode::NOT_FOUND,
        format!(
            "no route for {} {}",
            request.method(),
            request.uri().path()
        ),
    )
}

/// Relay handler: match the route, forward, pipe the response back.
async fn relay_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let route = routing::match_path(&path);
    let client_id = route.as_ref().and_then(|r| r.client_id.clone());

    let result = match route {
        Some(route) => state.engine.forward(&route, request).await,
        None => Err(RelayError::NoRoute(path.clone())),
    };

    match result {
        Ok((response, mode)) => {
            logging::record_forward(
                state.config.debug_log,
                &method,
                &path,
                client_id.as_deref(),
                mode.as_str(),
                Some(response.status()),
                start.elapsed(),
            );
            response
        }
        Err(error) => {
            tracing::warn!(method = %method, path = %path, error = %error, "relay failed");
            logging::record_forward(
                state.config.debug_log,
                &method,
                &path,
                client_id.as_deref(),
                "error",
                Some(error.status()),
                start.elapsed(),
            );
            error.into_response()
        }
    }
}
