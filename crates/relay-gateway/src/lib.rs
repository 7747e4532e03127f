// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Webhook ingester for the relay demos.
//!
//! Accepts `POST /` with a JSON message, strips non-printable characters from
//! the text, uploads supported attachments to object storage, and indexes
//! the results through an [`relay_core::Indexer`].

pub mod handlers;
pub mod ingest;
pub mod payload;
pub mod server;

pub use ingest::{AttachmentPlan, Ingester};
pub use payload::WebhookPayload;
pub use server::{router, start_server, GatewayState, DEFAULT_MAX_BODY_BYTES};
