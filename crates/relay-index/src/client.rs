// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the indexing API.
//!
//! Provides [`IndexClient`], which creates, fetches and deletes objects and
//! runs semantic searches over their contents.

use std::time::Duration;

use async_trait::async_trait;
use relay_config::model::IndexingConfig;
use relay_core::types::{IndexRequest, IndexedObject, SearchHit, SearchQuery};
use relay_core::{Adapter, AdapterType, ContentSearch, Indexer, RelayError};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

/// Response body of `POST /v3/search/contents`.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    contents: Vec<SearchHit>,
}

/// HTTP client for the indexing API.
///
/// Sends the API key verbatim in the `Authorization` header. No retries.
#[derive(Debug, Clone)]
pub struct IndexClient {
    client: reqwest::Client,
    base_url: String,
}

impl IndexClient {
    /// Builds a client from the `[indexing]` section.
    ///
    /// Fails when no API key is configured.
    pub fn new(config: &IndexingConfig) -> Result<Self, RelayError> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| RelayError::Config("indexing.api_key is not set".into()))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(api_key)
                .map_err(|e| RelayError::Config(format!("invalid API key header value: {e}")))?,
        );

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| RelayError::Indexing {
            message: format!("failed to build HTTP client: {e}"),
            source: Some(Box::new(e)),
        })?;

        Ok(Self {
            client,
            base_url: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v3{path}", self.base_url)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<(StatusCode, String), RelayError> {
        let response = request.send().await.map_err(|e| RelayError::Indexing {
            message: format!("HTTP request failed: {e}"),
            source: Some(Box::new(e)),
        })?;
        let status = response.status();
        let body = response.text().await.map_err(|e| RelayError::Indexing {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        debug!(status = %status, "indexing response received");
        Ok((status, body))
    }
}

fn unexpected_status(status: StatusCode, body: &str) -> RelayError {
    RelayError::Indexing {
        message: format!("unexpected status code: {} ({})", status.as_u16(), body.trim()),
        source: None,
    }
}

/// Parses an object response. Every object the API returns has an id.
fn parse_object(body: &str) -> Result<IndexedObject, RelayError> {
    let object: IndexedObject = serde_json::from_str(body).map_err(|e| RelayError::Indexing {
        message: format!("failed to parse object response: {e}"),
        source: Some(Box::new(e)),
    })?;
    if object.id.trim().is_empty() {
        return Err(RelayError::Indexing {
            message: "object response carried no id".to_string(),
            source: None,
        });
    }
    Ok(object)
}

impl Adapter for IndexClient {
    fn name(&self) -> &str {
        "operand"
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Indexing
    }
}

#[async_trait]
impl Indexer for IndexClient {
    async fn create_object(&self, request: &IndexRequest) -> Result<IndexedObject, RelayError> {
        let (status, body) = self
            .send(self.client.post(self.url("/objects")).json(request))
            .await?;
        // Anything but 201 is a failure, including other 2xx codes.
        if status != StatusCode::CREATED {
            return Err(unexpected_status(status, &body));
        }
        let object = parse_object(&body)?;
        debug!(object_type = %request.object_type(), id = %object.id, "object created");
        Ok(object)
    }

    async fn get_object(&self, id: &str) -> Result<IndexedObject, RelayError> {
        let (status, body) = self
            .send(self.client.get(self.url(&format!("/objects/{id}"))))
            .await?;
        if status != StatusCode::OK {
            return Err(unexpected_status(status, &body));
        }
        parse_object(&body)
    }

    async fn delete_object(&self, id: &str) -> Result<(), RelayError> {
        let (status, body) = self
            .send(self.client.delete(self.url(&format!("/objects/{id}"))))
            .await?;
        if !status.is_success() {
            return Err(unexpected_status(status, &body));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentSearch for IndexClient {
    async fn search_contents(&self, query: &SearchQuery) -> Result<Vec<SearchHit>, RelayError> {
        let (status, body) = self
            .send(self.client.post(self.url("/search/contents")).json(query))
            .await?;
        if status != StatusCode::OK {
            return Err(unexpected_status(status, &body));
        }
        let response: SearchResponse =
            serde_json::from_str(&body).map_err(|e| RelayError::Indexing {
                message: format!("failed to parse search response: {e}"),
                source: Some(Box::new(e)),
            })?;
        Ok(response.contents)
    }
}
