// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turns one inbound message into zero, one or two index requests.
//!
//! The text request always goes first. Attachments are uploaded to object
//! storage and indexed by URL. The first failure stops the rest.

use std::sync::Arc;

use chrono::Utc;
use relay_core::{Adapter, AttachmentKind, IncomingMessage, IndexRequest, Indexer, ObjectStore, RelayError};
use tracing::{debug, info, warn};

/// Property key carrying the sender on every webhook object.
const FROM_PROPERTY: &str = "from";

/// What to do with a message's attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentPlan {
    /// No attachment, or storage is not configured.
    None,
    /// Upload and index as this kind.
    Index(AttachmentKind),
    /// MIME type the indexing API cannot handle.
    Unsupported,
}

/// Decides how to treat the attachment of `message`.
pub fn plan_attachment(message: &IncomingMessage, storage_enabled: bool) -> AttachmentPlan {
    let Some((_, mime)) = message.attachment_parts() else {
        return AttachmentPlan::None;
    };
    if !storage_enabled {
        debug!(mime, "storage not configured, ignoring attachment");
        return AttachmentPlan::None;
    }
    match AttachmentKind::from_mime(mime) {
        Some(kind) => AttachmentPlan::Index(kind),
        None => AttachmentPlan::Unsupported,
    }
}

/// Indexes webhook messages.
#[derive(Clone)]
pub struct Ingester {
    indexer: Arc<dyn Indexer>,
    store: Option<Arc<dyn ObjectStore>>,
    parent_id: Option<String>,
    key_prefix: String,
}

impl Ingester {
    pub fn new(
        indexer: Arc<dyn Indexer>,
        store: Option<Arc<dyn ObjectStore>>,
        parent_id: Option<String>,
        key_prefix: impl Into<String>,
    ) -> Self {
        Self {
            indexer,
            store,
            parent_id,
            key_prefix: key_prefix.into(),
        }
    }

    pub fn storage_enabled(&self) -> bool {
        self.store.is_some()
    }

    /// Object key for a new attachment of `kind`.
    pub fn object_key(&self, kind: AttachmentKind) -> String {
        format!("/{}/{kind}/{}", self.key_prefix, uuid::Uuid::new_v4())
    }

    fn request(&self, request: IndexRequest, sender: &str) -> IndexRequest {
        request
            .with_property(FROM_PROPERTY, sender)
            .with_timestamp_label(Utc::now().timestamp())
            .with_parent(self.parent_id.clone())
    }

    /// Indexes `message` and returns how many objects were created.
    pub async fn ingest(&self, message: &IncomingMessage) -> Result<usize, RelayError> {
        let mut indexed = 0;

        if !message.text.is_empty() {
            let request = self.request(IndexRequest::text(message.text.clone()), &message.sender);
            self.indexer.create_object(&request).await?;
            indexed += 1;
        }

        match (plan_attachment(message, self.storage_enabled()), &self.store, message.attachment_parts()) {
            (AttachmentPlan::Index(kind), Some(store), Some((bytes, mime))) => {
                let key = self.object_key(kind);
                let url = store.put_public(&key, bytes.to_vec(), mime).await?;
                debug!(store = %store.name(), %key, "attachment uploaded");
                let request = self.request(IndexRequest::new(kind.metadata(url)), &message.sender);
                self.indexer.create_object(&request).await?;
                indexed += 1;
            }
            (AttachmentPlan::Unsupported, _, Some((_, mime))) => {
                warn!(mime, sender = %message.sender, "got unsupported attachment type");
            }
            _ => {}
        }

        info!(
            indexer = %self.indexer.name(),
            sender = %message.sender,
            indexed,
            "message ingested"
        );
        Ok(indexed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_with(mime: &str) -> IncomingMessage {
        IncomingMessage::new("alice", "").with_attachment(vec![1], mime)
    }

    #[test]
    fn plans_known_types() {
        assert_eq!(
            plan_attachment(&message_with("image/jpeg"), true),
            AttachmentPlan::Index(AttachmentKind::Image)
        );
        assert_eq!(
            plan_attachment(&message_with("application/pdf"), true),
            AttachmentPlan::Index(AttachmentKind::Pdf)
        );
        assert_eq!(
            plan_attachment(&message_with("image/gif"), true),
            AttachmentPlan::Unsupported
        );
    }

    #[test]
    fn no_storage_means_no_attachment_work() {
        assert_eq!(plan_attachment(&message_with("image/png"), false), AttachmentPlan::None);
        assert_eq!(
            plan_attachment(&IncomingMessage::new("alice", "hi"), true),
            AttachmentPlan::None
        );
    }

    #[test]
    fn empty_attachment_is_ignored() {
        let message = IncomingMessage::new("alice", "").with_attachment(Vec::new(), "image/png");
        assert_eq!(plan_attachment(&message, true), AttachmentPlan::None);
    }
}
