//! cts-server: HTTP boundary for ctsearch.
//!
//! Exposes the search engine over axum:
//!
//! | Route | Purpose |
//! |-------|---------|
//! | `GET /search?q=&steps=&mode=` | Run a search, returns a JSON array of trial summaries |
//! | `GET /trials/{id}` | Look up a single trial |
//! | `GET /healthz` | Liveness plus record count |
//!
//! Empty queries are rejected here with `400 {"error": "No query provided"}`
//! and never reach the core.

pub mod error;
pub mod routes;

use axum::routing::get;
use axum::Router;
use cts_core::SearchEngine;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ApiResult};

/// State shared by every handler.
#[derive(Debug)]
pub struct AppState {
    pub engine: Arc<SearchEngine>,
    /// Mode name used when a request omits `mode`.
    pub default_mode: String,
}

impl AppState {
    pub fn new(engine: Arc<SearchEngine>, default_mode: impl Into<String>) -> Self {
        Self {
            engine,
            default_mode: default_mode.into(),
        }
    }
}

/// Build the router. With `cors`, any origin may call the API.
pub fn router(state: Arc<AppState>, cors: bool) -> Router {
    let router = Router::new()
        .route("/search", get(routes::search))
        .route("/trials/{id}", get(routes::trial))
        .route("/healthz", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if cors {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    }
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: SocketAddr, state: Arc<AppState>, cors: bool) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, records = state.engine.store().len(), "listening");

    axum::serve(listener, router(state, cors))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
}
