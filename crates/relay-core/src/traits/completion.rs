// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Completion adapter trait for text-completion engines.

use async_trait::async_trait;

use crate::error::RelayError;
use crate::traits::adapter::Adapter;
use crate::types::{CompletionRequest, CompletionResponse};

/// Adapter for a prompt-in, choices-out completion API.
#[async_trait]
pub trait Completer: Adapter {
    /// Sends the prompt and returns every choice the engine produced.
    async fn complete(&self, request: &CompletionRequest)
        -> Result<CompletionResponse, RelayError>;
}
