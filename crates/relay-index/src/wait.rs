// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Polling until an object leaves the `indexing` state.

use std::time::Duration;

use relay_core::{IndexedObject, Indexer, IndexingStatus, RelayError};
use tracing::debug;

/// Polls `id` every `poll_interval` until its status is no longer
/// [`IndexingStatus::Indexing`], and returns the final object.
///
/// Gives up with [`RelayError::Timeout`] after `timeout`.
pub async fn wait_until_indexed(
    indexer: &dyn Indexer,
    id: &str,
    poll_interval: Duration,
    timeout: Duration,
) -> Result<IndexedObject, RelayError> {
    tokio::time::timeout(timeout, poll(indexer, id, poll_interval))
        .await
        .map_err(|_| RelayError::Timeout { duration: timeout })?
}

async fn poll(
    indexer: &dyn Indexer,
    id: &str,
    poll_interval: Duration,
) -> Result<IndexedObject, RelayError> {
    loop {
        let object = indexer.get_object(id).await?;
        if object.indexing_status != IndexingStatus::Indexing {
            debug!(id, status = %object.indexing_status, "object finished indexing");
            return Ok(object);
        }
        tokio::time::sleep(poll_interval).await;
    }
}
