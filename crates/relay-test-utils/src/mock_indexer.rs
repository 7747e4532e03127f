// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock indexing API.
//!
//! `MockIndexer` implements both `Indexer` and `ContentSearch`. Created
//! objects get sequential ids (`obj-1`, `obj-2`, ...).

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use relay_core::{
    Adapter, AdapterType, ContentSearch, IndexRequest, IndexedObject, Indexer, IndexingStatus,
    RelayError, SearchHit, SearchQuery,
};

#[derive(Default)]
struct State {
    created: Vec<IndexRequest>,
    deleted: Vec<String>,
    searches: Vec<SearchQuery>,
    statuses: VecDeque<IndexingStatus>,
    search_results: VecDeque<Vec<SearchHit>>,
    fail_create_at: Option<usize>,
    fail_delete: bool,
    fail_search: bool,
}

/// A mock indexing API that records every call.
#[derive(Clone, Default)]
pub struct MockIndexer {
    state: Arc<Mutex<State>>,
}

impl MockIndexer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the create call with this zero-based index (earlier calls succeed).
    pub fn failing_on_create(self, index: usize) -> Self {
        self.configure(|s| s.fail_create_at = Some(index))
    }

    /// Statuses returned by successive `get_object` calls; `ready` once exhausted.
    pub fn with_statuses(self, statuses: Vec<IndexingStatus>) -> Self {
        self.configure(|s| s.statuses = statuses.into())
    }

    /// Results returned by successive searches; empty once exhausted.
    pub fn with_search_results(self, results: Vec<Vec<SearchHit>>) -> Self {
        self.configure(|s| s.search_results = results.into())
    }

    pub fn failing_delete(self) -> Self {
        self.configure(|s| s.fail_delete = true)
    }

    pub fn failing_search(self) -> Self {
        self.configure(|s| s.fail_search = true)
    }

    /// Builders must run before the mock is cloned, so no clone misses them.
    fn configure(mut self, f: impl FnOnce(&mut State)) -> Self {
        let state = Arc::get_mut(&mut self.state)
            .expect("configure MockIndexer before cloning it");
        f(state.get_mut());
        self
    }

    /// Every create request received, including the one that failed.
    pub async fn created(&self) -> Vec<IndexRequest> {
        self.state.lock().await.created.clone()
    }

    pub async fn deleted(&self) -> Vec<String> {
        self.state.lock().await.deleted.clone()
    }

    pub async fn searches(&self) -> Vec<SearchQuery> {
        self.state.lock().await.searches.clone()
    }
}

fn mock_failure(what: &str) -> RelayError {
    RelayError::Indexing {
        message: format!("unexpected status code: 500 (mock {what} failure)"),
        source: None,
    }
}

impl Adapter for MockIndexer {
    fn name(&self) -> &str {
        "mock-indexer"
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Indexing
    }
}

#[async_trait]
impl Indexer for MockIndexer {
    async fn create_object(&self, request: &IndexRequest) -> Result<IndexedObject, RelayError> {
        let mut state = self.state.lock().await;
        let index = state.created.len();
        state.created.push(request.clone());
        if state.fail_create_at == Some(index) {
            return Err(mock_failure("create"));
        }
        Ok(IndexedObject {
            id: format!("obj-{}", index + 1),
            indexing_status: IndexingStatus::Indexing,
            label: request.label.clone(),
        })
    }

    async fn get_object(&self, id: &str) -> Result<IndexedObject, RelayError> {
        let mut state = self.state.lock().await;
        let status = state.statuses.pop_front().unwrap_or(IndexingStatus::Ready);
        Ok(IndexedObject {
            id: id.to_string(),
            indexing_status: status,
            label: None,
        })
    }

    async fn delete_object(&self, id: &str) -> Result<(), RelayError> {
        let mut state = self.state.lock().await;
        state.deleted.push(id.to_string());
        if state.fail_delete {
            return Err(mock_failure("delete"));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentSearch for MockIndexer {
    async fn search_contents(&self, query: &SearchQuery) -> Result<Vec<SearchHit>, RelayError> {
        let mut state = self.state.lock().await;
        state.searches.push(query.clone());
        if state.fail_search {
            return Err(mock_failure("search"));
        }
        Ok(state.search_results.pop_front().unwrap_or_default())
    }
}
