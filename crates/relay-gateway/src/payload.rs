// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Webhook request body.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use relay_core::{IncomingMessage, RelayError};
use serde::{Deserialize, Deserializer};

/// JSON body of `POST /`.
///
/// Missing `from` or `message` decode as empty strings. `attachment` is
/// standard base64.
#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, deserialize_with = "base64_bytes")]
    pub attachment: Option<Vec<u8>>,
    #[serde(default)]
    pub attachment_type: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

fn base64_bytes<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(encoded) => STANDARD
            .decode(encoded.as_bytes())
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

impl WebhookPayload {
    /// Decodes a raw request body. Any syntax or shape error is an
    /// [`RelayError::InvalidPayload`].
    pub fn from_slice(body: &[u8]) -> Result<Self, RelayError> {
        serde_json::from_slice(body).map_err(|e| RelayError::InvalidPayload(e.to_string()))
    }

    /// Converts into a sanitized [`IncomingMessage`].
    pub fn into_message(self) -> IncomingMessage {
        let mut message = IncomingMessage::new(self.from, &self.message);
        message.attachment = self.attachment;
        message.attachment_type = self.attachment_type.filter(|t| !t.is_empty());
        message.token = self.token;
        message
    }
}
