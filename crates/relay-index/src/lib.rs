// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing API adapter for the relay demos.
//!
//! [`IndexClient`] implements both [`relay_core::Indexer`] and
//! [`relay_core::ContentSearch`] against the `/v3` REST API.

pub mod client;
pub mod wait;

pub use client::IndexClient;
pub use wait::wait_until_indexed;
