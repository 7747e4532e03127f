// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the engine-scoped completions endpoint.

use std::time::Duration;

use async_trait::async_trait;
use relay_config::model::OpenAiConfig;
use relay_core::{Adapter, AdapterType, Completer, CompletionRequest, CompletionResponse, RelayError};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Completion client bound to one engine.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    url: String,
    engine: String,
}

impl OpenAiClient {
    /// Builds a client from the `[openai]` section. Fails without an API key.
    pub fn new(config: &OpenAiConfig) -> Result<Self, RelayError> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| RelayError::Config("openai.api_key is not set".into()))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {api_key}"))
                .map_err(|e| RelayError::Config(format!("invalid API key header value: {e}")))?,
        );

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| RelayError::Completion {
            message: format!("failed to build HTTP client: {e}"),
            source: Some(Box::new(e)),
        })?;

        Ok(Self {
            client,
            url: format!(
                "{}/v1/engines/{}/completions",
                config.base_url.trim_end_matches('/'),
                config.engine
            ),
            engine: config.engine.clone(),
        })
    }

    /// The engine every request is sent to.
    pub fn engine(&self) -> &str {
        &self.engine
    }
}

impl Adapter for OpenAiClient {
    fn name(&self) -> &str {
        "openai"
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Completion
    }
}

#[async_trait]
impl Completer for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, RelayError> {
        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| RelayError::Completion {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| RelayError::Completion {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        debug!(status = %status, engine = %self.engine, "completion response received");

        if !status.is_success() {
            let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(api_err) => format!("API returned {status}: {}", api_err.error.message),
                Err(_) => format!("API returned {status}: {}", body.trim()),
            };
            return Err(RelayError::Completion {
                message,
                source: None,
            });
        }

        serde_json::from_str(&body).map_err(|e| RelayError::Completion {
            message: format!("failed to parse API response: {e}"),
            source: Some(Box::new(e)),
        })
    }
}
