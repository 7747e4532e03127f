// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock object storage that records uploads.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use relay_core::{Adapter, AdapterType, ObjectStore, RelayError};

/// Base of every URL the mock hands out.
pub const MOCK_STORAGE_URL: &str = "https://storage.test/media";

/// One recorded upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub key: String,
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// A bucket that keeps uploads in memory.
#[derive(Clone, Default)]
pub struct MockObjectStore {
    uploads: Arc<Mutex<Vec<StoredObject>>>,
    fail: bool,
}

impl MockObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose uploads always fail.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub async fn uploads(&self) -> Vec<StoredObject> {
        self.uploads.lock().await.clone()
    }
}

impl Adapter for MockObjectStore {
    fn name(&self) -> &str {
        "mock-store"
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Storage
    }
}

#[async_trait]
impl ObjectStore for MockObjectStore {
    async fn put_public(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, RelayError> {
        if self.fail {
            return Err(RelayError::Storage {
                message: format!("mock upload of {key} failed"),
                source: None,
            });
        }
        self.uploads.lock().await.push(StoredObject {
            key: key.to_string(),
            bytes,
            content_type: content_type.to_string(),
        });
        Ok(format!("{MOCK_STORAGE_URL}{key}"))
    }
}
