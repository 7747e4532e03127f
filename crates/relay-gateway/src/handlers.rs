// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the webhook ingester.
//!
//! Handles POST / and GET /health.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use relay_core::RelayError;
use serde::Serialize;
use tracing::{error, warn};

use crate::payload::WebhookPayload;
use crate::server::GatewayState;

/// Response body for a successful POST /.
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    /// Number of objects created.
    pub indexed: usize,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Whether attachments are uploaded and indexed.
    pub storage: bool,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(err: &RelayError) -> Response {
    let status = if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

/// POST /
///
/// The body is read raw so that every decoding failure maps to 400,
/// whatever the content type. A body over the configured limit is a 413.
pub async fn post_incoming(
    State(state): State<GatewayState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!(status = %rejection.status(), "rejected webhook body: {}", rejection.body_text());
            return (
                rejection.status(),
                Json(ErrorResponse {
                    error: rejection.body_text(),
                }),
            )
                .into_response();
        }
    };
    let message = match WebhookPayload::from_slice(&body) {
        Ok(payload) => payload.into_message(),
        Err(e) => return error_response(&e),
    };

    match state.ingester.ingest(&message).await {
        Ok(indexed) => (StatusCode::OK, Json(IngestResponse { indexed })).into_response(),
        Err(e) => {
            error!(error = %e, sender = %message.sender, "failed to ingest message");
            error_response(&e)
        }
    }
}

/// GET /health
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage: state.ingester.storage_enabled(),
    })
}
