// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The chatbot: prompt, completion, and turn logging.

use std::sync::Arc;

use relay_config::model::ChatConfig;
use relay_core::{Adapter, Completer, ConversationTurn, Direction, RelayError};
use relay_openai::CompletionSettings;
use tracing::debug;

use crate::history::{ConversationHistory, SEED_AI, SEED_HUMAN};
use crate::memory::LongTermMemory;
use crate::prompt::build_prompt;

/// Characters stripped from both ends of a completion.
const REPLY_TRIM: &[char] = &[' ', '\n', '\t'];

/// One conversation with the completion engine.
pub struct Chatbot {
    completer: Arc<dyn Completer>,
    memory: Option<LongTermMemory>,
    history: ConversationHistory,
    settings: CompletionSettings,
    preamble: String,
    history_window: usize,
}

impl Chatbot {
    pub fn new(
        completer: Arc<dyn Completer>,
        memory: Option<LongTermMemory>,
        settings: CompletionSettings,
        config: &ChatConfig,
    ) -> Self {
        Self {
            completer,
            memory,
            history: ConversationHistory::new(),
            settings,
            preamble: config.preamble.clone(),
            history_window: config.history_window,
        }
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn has_long_term_memory(&self) -> bool {
        self.memory.is_some()
    }

    /// Logs the opening greeting exchange.
    pub async fn seed(&mut self) -> Result<(), RelayError> {
        self.log(Direction::Inbound, SEED_HUMAN).await?;
        self.log(Direction::Outbound, SEED_AI).await
    }

    /// Generates a reply to `message` without recording anything.
    pub async fn respond(&self, message: &str) -> Result<String, RelayError> {
        let relevant = match &self.memory {
            Some(memory) => memory.recall(message).await?,
            None => Vec::new(),
        };
        let prompt = build_prompt(
            &self.preamble,
            &relevant,
            self.history.last_n(self.history_window),
            message,
        );
        debug!(
            completer = %self.completer.name(),
            relevant = relevant.len(),
            prompt_len = prompt.len(),
            "requesting completion"
        );

        let response = self.completer.complete(&self.settings.request(prompt)).await?;
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| RelayError::Completion {
                message: "completion returned zero choices".into(),
                source: None,
            })?;
        Ok(choice.text.trim_matches(REPLY_TRIM).to_string())
    }

    /// Logs a human message and the reply to it, in that order.
    pub async fn record_exchange(&mut self, message: &str, reply: &str) -> Result<(), RelayError> {
        self.log(Direction::Inbound, message).await?;
        self.log(Direction::Outbound, reply).await
    }

    /// Indexes a turn (with long-term memory) and appends it to the history.
    pub async fn log(&mut self, direction: Direction, text: &str) -> Result<(), RelayError> {
        let turn = ConversationTurn::new(direction, text);
        if let Some(memory) = &self.memory {
            memory.remember(&turn).await?;
        }
        self.history.push(turn);
        Ok(())
    }

    /// Ends the conversation, deleting the long-term memory collection.
    pub async fn shutdown(self) {
        if let Some(memory) = self.memory {
            memory.close().await;
        }
    }
}
