// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for relay integration tests.
//!
//! Mock adapters that record what they were asked to do, so gateway and
//! chatbot tests run without any external service.
//!
//! # Components
//!
//! - [`MockIndexer`] - Indexing and search API with recorded requests
//! - [`MockObjectStore`] - Bucket that records uploads
//! - [`MockCompleter`] - Completion engine with queued replies

pub mod mock_completer;
pub mod mock_indexer;
pub mod mock_store;

pub use mock_completer::MockCompleter;
pub use mock_indexer::MockIndexer;
pub use mock_store::{MockObjectStore, StoredObject};
