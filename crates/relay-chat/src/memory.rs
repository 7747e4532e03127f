// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Long-term conversation memory backed by the indexing API.
//!
//! Each session gets its own collection. Every logged turn is indexed under
//! it with a `direction` property, so searches can be scoped to what the
//! human said. The collection is deleted when the session ends.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use relay_config::model::IndexingConfig;
use relay_core::{
    Adapter, ContentSearch, ConversationTurn, Direction, IndexRequest, IndexedObject, Indexer,
    IndexingStatus, RelayError, SearchQuery,
};
use relay_index::wait_until_indexed;
use tracing::{debug, error, info};

const DIRECTION_PROPERTY: &str = "direction";

/// Polling and search limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemorySettings {
    pub poll_interval: Duration,
    pub wait_timeout: Duration,
    pub max_results: usize,
}

impl MemorySettings {
    pub fn from_config(config: &IndexingConfig) -> Self {
        Self {
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            wait_timeout: Duration::from_secs(config.wait_timeout_secs),
            max_results: config.search_max_results,
        }
    }
}

impl Default for MemorySettings {
    fn default() -> Self {
        Self::from_config(&IndexingConfig::default())
    }
}

/// A session collection in the indexing API.
pub struct LongTermMemory {
    indexer: Arc<dyn Indexer>,
    search: Arc<dyn ContentSearch>,
    collection_id: String,
    settings: MemorySettings,
}

impl LongTermMemory {
    /// Creates the session collection and waits until it is ready.
    pub async fn open(
        indexer: Arc<dyn Indexer>,
        search: Arc<dyn ContentSearch>,
        label: &str,
        settings: MemorySettings,
    ) -> Result<Self, RelayError> {
        let collection = indexer
            .create_object(&IndexRequest::collection().with_label(label))
            .await?;
        let collection =
            wait_until_ready(indexer.as_ref(), &collection.id, "collection", &settings).await?;
        info!(
            collection = %collection.id,
            indexer = %indexer.name(),
            search = %search.name(),
            "long-term memory collection ready"
        );

        Ok(Self {
            indexer,
            search,
            collection_id: collection.id,
            settings,
        })
    }

    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }

    /// Indexes `turn` under the collection. Empty turns are skipped.
    pub async fn remember(&self, turn: &ConversationTurn) -> Result<(), RelayError> {
        if turn.text.is_empty() {
            return Ok(());
        }
        let request = IndexRequest::text(turn.text.clone())
            .with_property(DIRECTION_PROPERTY, turn.direction.to_string())
            .with_parent(Some(self.collection_id.clone()));
        let object = self.indexer.create_object(&request).await?;
        wait_until_ready(self.indexer.as_ref(), &object.id, "message", &self.settings).await?;
        debug!(direction = %turn.direction, id = %object.id, "turn indexed");
        Ok(())
    }

    /// Earlier human messages most relevant to `query`, best match first.
    pub async fn recall(&self, query: &str) -> Result<Vec<String>, RelayError> {
        let search = SearchQuery {
            parent_ids: vec![self.collection_id.clone()],
            query: query.to_string(),
            max: self.settings.max_results,
            filter: BTreeMap::from([(
                DIRECTION_PROPERTY.to_string(),
                Direction::Inbound.to_string(),
            )]),
        };
        let hits = self.search.search_contents(&search).await?;
        debug!(hits = hits.len(), "long-term memory searched");
        Ok(hits.into_iter().map(|hit| hit.content).collect())
    }

    /// Deletes the collection. Failures are logged, never returned.
    pub async fn close(self) {
        match self.indexer.delete_object(&self.collection_id).await {
            Ok(()) => info!(collection = %self.collection_id, "long-term memory collection deleted"),
            Err(e) => error!(collection = %self.collection_id, error = %e, "error deleting collection"),
        }
    }
}

async fn wait_until_ready(
    indexer: &dyn Indexer,
    id: &str,
    what: &str,
    settings: &MemorySettings,
) -> Result<IndexedObject, RelayError> {
    let object = wait_until_indexed(indexer, id, settings.poll_interval, settings.wait_timeout).await?;
    if object.indexing_status != IndexingStatus::Ready {
        return Err(RelayError::Indexing {
            message: format!("{what} {id} is not ready: {}", object.indexing_status),
            source: None,
        });
    }
    Ok(object)
}
