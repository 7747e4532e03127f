// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter traits for the external services the demos talk to.
//!
//! Every adapter extends [`Adapter`] and uses `#[async_trait]` so flows can
//! hold them as `Arc<dyn Trait>` and tests can swap in mocks.

pub mod adapter;
pub mod completion;
pub mod indexer;
pub mod search;
pub mod storage;

pub use adapter::Adapter;
pub use completion::Completer;
pub use indexer::Indexer;
pub use search::ContentSearch;
pub use storage::ObjectStore;
