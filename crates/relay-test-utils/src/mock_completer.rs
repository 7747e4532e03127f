// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock completion engine for deterministic chatbot tests.
//!
//! Replies are popped from a FIFO queue. When the queue is empty, a single
//! "mock response" choice is returned.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use relay_core::{
    Adapter, AdapterType, Completer, CompletionChoice, CompletionRequest, CompletionResponse,
    RelayError,
};

/// A queued reply: `Some(text)` is one choice, `None` is zero choices.
type Reply = Option<String>;

/// A mock completion engine that records every request.
#[derive(Clone, Default)]
pub struct MockCompleter {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockCompleter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A completer pre-loaded with single-choice replies.
    pub fn with_responses(responses: Vec<String>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(responses.into_iter().map(Some).collect())),
            ..Self::default()
        }
    }

    /// Queue a reply with one choice.
    pub async fn add_response(&self, text: impl Into<String>) {
        self.replies.lock().await.push_back(Some(text.into()));
    }

    /// Queue a reply with zero choices.
    pub async fn add_empty_response(&self) {
        self.replies.lock().await.push_back(None);
    }

    /// Prompts received so far, one entry per request.
    pub async fn prompts(&self) -> Vec<String> {
        self.requests
            .lock()
            .await
            .iter()
            .map(|r| r.prompt.concat())
            .collect()
    }

    pub async fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().await.clone()
    }
}

impl Adapter for MockCompleter {
    fn name(&self) -> &str {
        "mock-completer"
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Completion
    }
}

#[async_trait]
impl Completer for MockCompleter {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, RelayError> {
        self.requests.lock().await.push(request.clone());
        let reply = self
            .replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Some("mock response".to_string()));
        let choices = reply
            .map(|text| CompletionChoice {
                text,
                index: 0,
                finish_reason: Some("stop".to_string()),
            })
            .into_iter()
            .collect();
        Ok(CompletionResponse { choices })
    }
}
