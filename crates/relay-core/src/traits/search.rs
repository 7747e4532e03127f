// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Semantic search adapter trait.

use async_trait::async_trait;

use crate::error::RelayError;
use crate::traits::adapter::Adapter;
use crate::types::{SearchHit, SearchQuery};

/// Adapter for semantic search over indexed contents.
#[async_trait]
pub trait ContentSearch: Adapter {
    /// Returns matching contents, most relevant first.
    async fn search_contents(&self, query: &SearchQuery) -> Result<Vec<SearchHit>, RelayError>;
}
