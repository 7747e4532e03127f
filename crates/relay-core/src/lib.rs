// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the relay demos.
//!
//! Holds the types that cross crate boundaries (inbound messages, index
//! requests, conversation turns), the adapter traits for every external
//! service, the shared error type, and printable-text sanitizing.

pub mod error;
pub mod text;
pub mod traits;
pub mod types;

pub use error::RelayError;
pub use text::sanitize;
pub use types::{
    AdapterType, AttachmentKind, CompletionChoice, CompletionRequest, CompletionResponse,
    ConversationTurn, Direction, IncomingMessage, IndexRequest, IndexedObject, IndexingStatus,
    ObjectMetadata, ObjectType, SearchHit, SearchQuery,
};

pub use traits::{Adapter, Completer, ContentSearch, Indexer, ObjectStore};
