// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types shared by every relay adapter and flow.

use thiserror::Error;

/// The error type returned by all adapter traits and both demo flows.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Configuration errors (missing credentials, invalid values).
    #[error("configuration error: {0}")]
    Config(String),

    /// An inbound payload could not be decoded.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// Indexing API errors (transport failure, unexpected status, bad body).
    #[error("indexing error: {message}")]
    Indexing {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Object storage errors (signing, upload failure).
    #[error("storage error: {message}")]
    Storage {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Completion API errors, including a response without choices.
    #[error("completion error: {message}")]
    Completion {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RelayError {
    /// Whether the error was caused by the caller rather than a downstream service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, RelayError::InvalidPayload(_))
    }
}
