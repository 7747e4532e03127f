// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The line-oriented console loop.

use std::collections::VecDeque;
use std::io::Write;

use relay_core::RelayError;

use crate::bot::Chatbot;

/// Prompt shown before each human line.
pub const USER_PROMPT: &str = "You: ";
/// Prefix of each printed reply.
pub const BOT_PREFIX: &str = "Bot: ";
/// Input that ends the session.
pub const QUIT_COMMAND: &str = "quit";

/// Where human lines come from.
pub trait LineSource {
    /// Shows `prompt` and reads one line. `None` means end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, RelayError>;
}

/// A fixed list of lines, for scripted sessions.
#[derive(Debug, Default)]
pub struct ScriptedLines {
    lines: VecDeque<String>,
    prompts: usize,
}

impl ScriptedLines {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: 0,
        }
    }

    /// How many times a line was asked for.
    pub fn prompts(&self) -> usize {
        self.prompts
    }
}

impl LineSource for ScriptedLines {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>, RelayError> {
        self.prompts += 1;
        Ok(self.lines.pop_front())
    }
}

/// Runs the conversation until `quit`, end of input, or the first error.
///
/// Blank lines are ignored. Each reply is written as `Bot: <reply>` before
/// the exchange is logged.
pub async fn run_session<S, W>(bot: &mut Chatbot, input: &mut S, out: &mut W) -> Result<(), RelayError>
where
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    while let Some(line) = input.read_line(USER_PROMPT)? {
        let message = line.trim();
        if message == QUIT_COMMAND {
            break;
        }
        if message.is_empty() {
            continue;
        }

        let reply = bot.respond(message).await?;
        writeln!(out, "{BOT_PREFIX}{reply}")
            .and_then(|()| out.flush())
            .map_err(|e| RelayError::Internal(format!("failed to write reply: {e}")))?;

        bot.record_exchange(message, &reply).await?;
    }
    Ok(())
}
