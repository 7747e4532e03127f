// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `relay chat`: the console chatbot on a readline prompt.

use std::sync::Arc;

use colored::Colorize;
use relay_chat::{run_session, Chatbot, LineSource, LongTermMemory, MemorySettings};
use relay_config::RelayConfig;
use relay_core::{Adapter, RelayError};
use relay_index::IndexClient;
use relay_openai::{CompletionSettings, OpenAiClient};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{info, warn};

/// Human input from a rustyline editor.
struct ReadlineInput {
    editor: DefaultEditor,
}

impl ReadlineInput {
    fn new() -> Result<Self, RelayError> {
        let editor = DefaultEditor::new()
            .map_err(|e| RelayError::Internal(format!("failed to initialize readline: {e}")))?;
        Ok(Self { editor })
    }
}

impl LineSource for ReadlineInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, RelayError> {
        match self.editor.readline(&prompt.green().to_string()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            // Ctrl+C and Ctrl+D both end the session.
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(RelayError::Internal(format!("failed to read input: {e}"))),
        }
    }
}

pub async fn run_chat(config: &RelayConfig) -> Result<(), RelayError> {
    let completer = Arc::new(OpenAiClient::new(&config.openai)?);
    info!(
        adapter = %completer.name(),
        kind = %completer.adapter_type(),
        engine = completer.engine(),
        "starting relay chat"
    );

    let memory = open_memory(config).await?;
    let mut bot = Chatbot::new(
        completer,
        memory,
        CompletionSettings::from_config(&config.openai),
        &config.chat,
    );

    let result = converse(&mut bot, config).await;
    bot.shutdown().await;
    result
}

async fn open_memory(config: &RelayConfig) -> Result<Option<LongTermMemory>, RelayError> {
    if !config.chat.long_term_memory {
        return Ok(None);
    }
    if config.indexing.api_key.is_none() {
        warn!("indexing.api_key not set, long-term memory disabled");
        return Ok(None);
    }
    let client = Arc::new(IndexClient::new(&config.indexing)?);
    let memory = LongTermMemory::open(
        client.clone(),
        client,
        &config.chat.collection_label,
        MemorySettings::from_config(&config.indexing),
    )
    .await?;
    Ok(Some(memory))
}

async fn converse(bot: &mut Chatbot, config: &RelayConfig) -> Result<(), RelayError> {
    if config.chat.seed_conversation {
        bot.seed().await?;
    }

    let mut input = ReadlineInput::new()?;
    eprintln!(
        "{} {}",
        "relay chat".bold().green(),
        format!("(type {} to exit)", "quit".yellow()).dimmed()
    );

    let mut stdout = std::io::stdout();
    run_session(bot, &mut input, &mut stdout).await
}
