// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across adapter traits and both demo flows.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use strum::{Display, EnumString};

use crate::text::sanitize;

/// Identifies the kind of adapter behind a trait object, used in log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum AdapterType {
    Indexing,
    Storage,
    Completion,
}

// --- Inbound webhook messages ---

/// A message received by the webhook ingester.
///
/// Lives for the duration of one request. The text is already stripped of
/// non-printable characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    /// Sender identifier (phone number, handle, ...).
    pub sender: String,
    /// Sanitized message text. May be empty.
    pub text: String,
    /// Raw attachment bytes, if any.
    pub attachment: Option<Vec<u8>>,
    /// MIME type of the attachment, if any.
    pub attachment_type: Option<String>,
    /// Opaque continuation token supplied by the sender.
    pub token: Option<String>,
}

impl IncomingMessage {
    /// Builds a message, sanitizing `raw_text`.
    pub fn new(sender: impl Into<String>, raw_text: &str) -> Self {
        Self {
            sender: sender.into(),
            text: sanitize(raw_text),
            attachment: None,
            attachment_type: None,
            token: None,
        }
    }

    /// Attaches binary content with its MIME type.
    pub fn with_attachment(mut self, bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        self.attachment = Some(bytes);
        self.attachment_type = Some(mime_type.into());
        self
    }

    /// Returns the attachment bytes and MIME type when both are present and non-empty.
    pub fn attachment_parts(&self) -> Option<(&[u8], &str)> {
        match (&self.attachment, &self.attachment_type) {
            (Some(bytes), Some(mime)) if !bytes.is_empty() && !mime.is_empty() => {
                Some((bytes.as_slice(), mime.as_str()))
            }
            _ => None,
        }
    }
}

/// Attachment categories the indexing API understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum AttachmentKind {
    Image,
    Pdf,
}

impl AttachmentKind {
    /// Maps a MIME type to an attachment kind. Unrecognized types yield `None`.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/png" => Some(AttachmentKind::Image),
            "application/pdf" => Some(AttachmentKind::Pdf),
            _ => None,
        }
    }

    /// Builds the metadata for an object of this kind stored at `url`.
    pub fn metadata(self, url: String) -> ObjectMetadata {
        match self {
            AttachmentKind::Image => ObjectMetadata::Image { image_url: url },
            AttachmentKind::Pdf => ObjectMetadata::Pdf { pdf_url: url },
        }
    }
}

// --- Indexing API objects ---

/// Object types accepted by `POST /v3/objects`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ObjectType {
    Text,
    Image,
    Pdf,
    Collection,
}

/// Type-specific metadata of an object to index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectMetadata {
    Text { text: String },
    Image { image_url: String },
    Pdf { pdf_url: String },
    Collection,
}

impl ObjectMetadata {
    /// The `type` field that goes with this metadata.
    pub fn object_type(&self) -> ObjectType {
        match self {
            ObjectMetadata::Text { .. } => ObjectType::Text,
            ObjectMetadata::Image { .. } => ObjectType::Image,
            ObjectMetadata::Pdf { .. } => ObjectType::Pdf,
            ObjectMetadata::Collection => ObjectType::Collection,
        }
    }
}

impl Serialize for ObjectMetadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match self {
            ObjectMetadata::Text { text } => map.serialize_entry("text", text)?,
            ObjectMetadata::Image { image_url } => map.serialize_entry("imageUrl", image_url)?,
            ObjectMetadata::Pdf { pdf_url } => map.serialize_entry("pdfUrl", pdf_url)?,
            ObjectMetadata::Collection => {}
        }
        map.end()
    }
}

/// A request to create one object in the indexing API.
///
/// Encodes as `{type, metadata, properties?, label?, parentId?}`; empty
/// properties and absent optional fields are omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRequest {
    pub metadata: ObjectMetadata,
    pub properties: BTreeMap<String, String>,
    pub label: Option<String>,
    pub parent_id: Option<String>,
}

impl IndexRequest {
    pub fn new(metadata: ObjectMetadata) -> Self {
        Self {
            metadata,
            properties: BTreeMap::new(),
            label: None,
            parent_id: None,
        }
    }

    /// A `text` object.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(ObjectMetadata::Text { text: text.into() })
    }

    /// An empty `collection` object.
    pub fn collection() -> Self {
        Self::new(ObjectMetadata::Collection)
    }

    pub fn object_type(&self) -> ObjectType {
        self.metadata.object_type()
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Labels the object with a Unix timestamp in seconds, rendered in decimal.
    pub fn with_timestamp_label(self, unix_secs: i64) -> Self {
        self.with_label(unix_secs.to_string())
    }

    pub fn with_parent(mut self, parent_id: Option<String>) -> Self {
        self.parent_id = parent_id;
        self
    }
}

impl Serialize for IndexRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", &self.object_type())?;
        map.serialize_entry("metadata", &self.metadata)?;
        if !self.properties.is_empty() {
            map.serialize_entry("properties", &self.properties)?;
        }
        if let Some(label) = &self.label {
            map.serialize_entry("label", label)?;
        }
        if let Some(parent_id) = &self.parent_id {
            map.serialize_entry("parentId", parent_id)?;
        }
        map.end()
    }
}

/// Indexing state reported for an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum IndexingStatus {
    #[default]
    Indexing,
    Ready,
    Error,
    #[serde(other)]
    Unknown,
}

/// An object as returned by the indexing API.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedObject {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub indexing_status: IndexingStatus,
    #[serde(default)]
    pub label: Option<String>,
}

// --- Semantic search ---

/// Arguments for `POST /v3/search/contents`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub parent_ids: Vec<String>,
    pub query: String,
    pub max: usize,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub filter: BTreeMap<String, String>,
}

/// One matching content snippet, most relevant first in a result list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    #[serde(default)]
    pub object_id: String,
    pub content: String,
    #[serde(default)]
    pub score: f64,
}

// --- Completion API ---

/// Sampling request for a text completion engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub prompt: Vec<String>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stop: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompletionChoice {
    pub text: String,
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

// --- Conversation ---

/// Who sent a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    /// Sent by the human.
    Inbound,
    /// Sent by the chatbot.
    Outbound,
}

/// One line of a chatbot conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationTurn {
    pub timestamp: DateTime<Utc>,
    pub direction: Direction,
    pub text: String,
}

impl ConversationTurn {
    pub fn new(direction: Direction, text: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            direction,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_request_encodes_all_fields() {
        let req = IndexRequest::text("hi")
            .with_property("from", "alice")
            .with_timestamp_label(1_700_000_000)
            .with_parent(Some("col-1".into()));
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "text",
                "metadata": {"text": "hi"},
                "properties": {"from": "alice"},
                "label": "1700000000",
                "parentId": "col-1"
            })
        );
    }

    #[test]
    fn optional_fields_are_omitted() {
        let value = serde_json::to_value(IndexRequest::collection()).unwrap();
        assert_eq!(value, json!({"type": "collection", "metadata": {}}));
    }

    #[test]
    fn attachment_metadata_uses_url_field_names() {
        let image = IndexRequest::new(AttachmentKind::Image.metadata("https://s/i".into()));
        let pdf = IndexRequest::new(AttachmentKind::Pdf.metadata("https://s/p".into()));
        assert_eq!(
            serde_json::to_value(&image).unwrap()["metadata"],
            json!({"imageUrl": "https://s/i"})
        );
        assert_eq!(serde_json::to_value(&image).unwrap()["type"], "image");
        assert_eq!(
            serde_json::to_value(&pdf).unwrap()["metadata"],
            json!({"pdfUrl": "https://s/p"})
        );
        assert_eq!(serde_json::to_value(&pdf).unwrap()["type"], "pdf");
    }

    #[test]
    fn recognized_mime_types() {
        assert_eq!(AttachmentKind::from_mime("image/jpeg"), Some(AttachmentKind::Image));
        assert_eq!(AttachmentKind::from_mime("image/png"), Some(AttachmentKind::Image));
        assert_eq!(AttachmentKind::from_mime("application/pdf"), Some(AttachmentKind::Pdf));
        assert_eq!(AttachmentKind::from_mime("image/gif"), None);
        assert_eq!(AttachmentKind::from_mime(""), None);
    }

    #[test]
    fn incoming_message_sanitizes_text() {
        let msg = IncomingMessage::new("alice", "hi\u{0007}");
        assert_eq!(msg.text, "hi");
        assert!(msg.attachment_parts().is_none());
    }

    #[test]
    fn empty_attachment_is_not_an_attachment() {
        let msg = IncomingMessage::new("alice", "").with_attachment(Vec::new(), "image/png");
        assert!(msg.attachment_parts().is_none());

        let msg = IncomingMessage::new("alice", "").with_attachment(vec![1, 2, 3], "image/png");
        assert_eq!(msg.attachment_parts(), Some((&[1u8, 2, 3][..], "image/png")));
    }

    #[test]
    fn indexed_object_tolerates_unknown_status() {
        let obj: IndexedObject =
            serde_json::from_value(json!({"id": "o1", "indexingStatus": "queued"})).unwrap();
        assert_eq!(obj.indexing_status, IndexingStatus::Unknown);

        let obj: IndexedObject = serde_json::from_value(json!({"id": "o2"})).unwrap();
        assert_eq!(obj.indexing_status, IndexingStatus::Indexing);
    }

    #[test]
    fn search_query_encodes_camel_case() {
        let query = SearchQuery {
            parent_ids: vec!["col".into()],
            query: "pizza".into(),
            max: 5,
            filter: BTreeMap::from([("direction".to_string(), Direction::Inbound.to_string())]),
        };
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({
                "parentIds": ["col"],
                "query": "pizza",
                "max": 5,
                "filter": {"direction": "inbound"}
            })
        );
    }

    #[test]
    fn adapter_type_displays_snake_case() {
        assert_eq!(AdapterType::Indexing.to_string(), "indexing");
        assert_eq!(AdapterType::Completion.to_string(), "completion");
    }
}
