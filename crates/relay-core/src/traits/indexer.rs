// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing adapter trait for creating and managing content objects.

use async_trait::async_trait;

use crate::error::RelayError;
use crate::traits::adapter::Adapter;
use crate::types::{IndexRequest, IndexedObject};

/// Adapter for the object endpoints of the indexing API.
#[async_trait]
pub trait Indexer: Adapter {
    /// Creates an object. Succeeds only when the service confirms creation.
    async fn create_object(&self, request: &IndexRequest) -> Result<IndexedObject, RelayError>;

    /// Fetches the current state of an object.
    async fn get_object(&self, id: &str) -> Result<IndexedObject, RelayError>;

    /// Deletes an object and everything under it.
    async fn delete_object(&self, id: &str) -> Result<(), RelayError>;
}
