// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Console chatbot for the relay demos.
//!
//! Builds each prompt from a persona preamble, earlier human messages found
//! by semantic search (long-term memory), and the last few turns
//! (short-term memory).

pub mod bot;
pub mod history;
pub mod memory;
pub mod prompt;
pub mod session;

pub use bot::Chatbot;
pub use history::ConversationHistory;
pub use memory::{LongTermMemory, MemorySettings};
pub use prompt::build_prompt;
pub use session::{run_session, LineSource, ScriptedLines};
