// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Completion API adapter for the relay chatbot.

pub mod client;
pub mod settings;

pub use client::OpenAiClient;
pub use settings::CompletionSettings;
