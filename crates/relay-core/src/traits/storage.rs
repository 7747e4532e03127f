// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Object storage adapter trait for attachment uploads.

use async_trait::async_trait;

use crate::error::RelayError;
use crate::traits::adapter::Adapter;

/// Adapter for a bucket that serves uploaded objects publicly.
#[async_trait]
pub trait ObjectStore: Adapter {
    /// Uploads `bytes` under `key` (which starts with `/`) with a public-read
    /// ACL and returns the object's public URL.
    async fn put_public(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, RelayError>;
}
