// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Webhook HTTP server built on axum.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use relay_config::model::ServerConfig;
use relay_core::RelayError;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::ingest::Ingester;

/// Webhook body limit used when none is configured.
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    pub ingester: Ingester,
    /// Largest accepted `POST /` body.
    pub max_body_bytes: usize,
}

impl GatewayState {
    pub fn new(ingester: Ingester) -> Self {
        Self {
            ingester,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}

/// Builds the router:
/// - POST / (webhook, body limit from `max_body_bytes`)
/// - GET /health
pub fn router(state: GatewayState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_body_bytes);
    Router::new()
        .route("/", post(handlers::post_incoming).layer(body_limit))
        .route("/health", get(handlers::get_health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `bind_address:port` and serves until Ctrl-C.
pub async fn start_server(config: &ServerConfig, state: GatewayState) -> Result<(), RelayError> {
    let addr = format!("{}:{}", config.bind_address, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| RelayError::Internal(format!("failed to bind webhook listener to {addr}: {e}")))?;

    tracing::info!(
        storage = state.ingester.storage_enabled(),
        max_body_bytes = state.max_body_bytes,
        "webhook listener on {addr}"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| RelayError::Internal(format!("webhook server error: {e}")))?;

    tracing::info!("webhook listener stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
