// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed sampling parameters applied to every chatbot prompt.

use relay_config::model::OpenAiConfig;
use relay_core::CompletionRequest;

/// Sampling parameters, fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
    pub stop: Vec<String>,
}

impl CompletionSettings {
    pub fn from_config(config: &OpenAiConfig) -> Self {
        Self {
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            top_p: config.top_p,
            frequency_penalty: config.frequency_penalty,
            presence_penalty: config.presence_penalty,
            stop: config.stop.clone(),
        }
    }

    /// A single-prompt request with these settings.
    pub fn request(&self, prompt: impl Into<String>) -> CompletionRequest {
        CompletionRequest {
            prompt: vec![prompt.into()],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            top_p: self.top_p,
            frequency_penalty: self.frequency_penalty,
            presence_penalty: self.presence_penalty,
            stop: self.stop.clone(),
        }
    }
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self::from_config(&OpenAiConfig::default())
    }
}
