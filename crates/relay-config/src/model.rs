// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key fails
//! at startup instead of being silently ignored.

use serde::{Deserialize, Serialize};

/// Top-level relay configuration, built once at startup and passed by reference.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RelayConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Webhook listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Indexing API settings.
    #[serde(default)]
    pub indexing: IndexingConfig,

    /// Attachment object storage settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Completion API settings.
    #[serde(default)]
    pub openai: OpenAiConfig,

    /// Console chatbot settings.
    #[serde(default)]
    pub chat: ChatConfig,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            server: ServerConfig::default(),
            indexing: IndexingConfig::default(),
            storage: StorageConfig::default(),
            openai: OpenAiConfig::default(),
            chat: ChatConfig::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Webhook listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind the listener to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Largest webhook body accepted, in bytes. Attachments arrive base64
    /// encoded, so this is about 4/3 of the largest raw attachment.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_body_bytes() -> usize {
    64 * 1024 * 1024
}

/// Indexing API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IndexingConfig {
    /// Base URL of the indexing API, without the `/v3` path.
    #[serde(default = "default_indexing_endpoint")]
    pub endpoint: String,

    /// API key sent verbatim in the `Authorization` header. `None` disables
    /// long-term memory in the chatbot.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Collection every webhook object is created under, if any.
    #[serde(default)]
    pub parent_id: Option<String>,

    /// Delay between polls while waiting for an object to finish indexing.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Upper bound on waiting for an object to finish indexing.
    #[serde(default = "default_wait_timeout_secs")]
    pub wait_timeout_secs: u64,

    /// Maximum number of long-term context results per search.
    #[serde(default = "default_search_max_results")]
    pub search_max_results: usize,

    /// Per-request timeout. `None` leaves requests unbounded.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            endpoint: default_indexing_endpoint(),
            api_key: None,
            parent_id: None,
            poll_interval_ms: default_poll_interval_ms(),
            wait_timeout_secs: default_wait_timeout_secs(),
            search_max_results: default_search_max_results(),
            request_timeout_secs: None,
        }
    }
}

fn default_indexing_endpoint() -> String {
    "https://api.operand.ai".to_string()
}

fn default_poll_interval_ms() -> u64 {
    500
}

fn default_wait_timeout_secs() -> u64 {
    60
}

fn default_search_max_results() -> usize {
    5
}

/// S3-compatible object storage configuration.
///
/// Attachments are only accepted when every credential field is set; a
/// partial configuration disables attachment indexing.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Service endpoint, e.g. `https://nyc3.digitaloceanspaces.com`.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Signing region, e.g. `us-east-1`.
    #[serde(default)]
    pub region: Option<String>,

    /// Bucket receiving uploads.
    #[serde(default)]
    pub bucket: Option<String>,

    /// Access key id.
    #[serde(default)]
    pub access_key: Option<String>,

    /// Secret access key.
    #[serde(default)]
    pub secret_key: Option<String>,

    /// First path segment of every uploaded object key.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// Per-request timeout. `None` leaves uploads unbounded.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            region: None,
            bucket: None,
            access_key: None,
            secret_key: None,
            key_prefix: default_key_prefix(),
            request_timeout_secs: None,
        }
    }
}

impl StorageConfig {
    /// True when endpoint, region, bucket, access key and secret are all non-empty.
    pub fn is_configured(&self) -> bool {
        [
            &self.endpoint,
            &self.region,
            &self.bucket,
            &self.access_key,
            &self.secret_key,
        ]
        .iter()
        .all(|v| v.as_deref().is_some_and(|s| !s.trim().is_empty()))
    }
}

fn default_key_prefix() -> String {
    "imessage".to_string()
}

/// Completion API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OpenAiConfig {
    /// API key. Required by `relay chat`.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the API.
    #[serde(default = "default_openai_base_url")]
    pub base_url: String,

    /// Completion engine.
    #[serde(default = "default_engine")]
    pub engine: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_top_p")]
    pub top_p: f32,

    #[serde(default)]
    pub frequency_penalty: f32,

    #[serde(default = "default_presence_penalty")]
    pub presence_penalty: f32,

    /// Stop sequences.
    #[serde(default = "default_stop")]
    pub stop: Vec<String>,

    /// Per-request timeout. `None` leaves requests unbounded.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_openai_base_url(),
            engine: default_engine(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            top_p: default_top_p(),
            frequency_penalty: 0.0,
            presence_penalty: default_presence_penalty(),
            stop: default_stop(),
            request_timeout_secs: None,
        }
    }
}

fn default_openai_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_engine() -> String {
    "text-davinci-002".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    64
}

fn default_top_p() -> f32 {
    1.0
}

fn default_presence_penalty() -> f32 {
    0.6
}

fn default_stop() -> Vec<String> {
    vec!["Human: ".to_string(), "AI: ".to_string()]
}

/// Console chatbot configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    /// Persona text that opens every prompt.
    #[serde(default = "default_preamble")]
    pub preamble: String,

    /// Number of recent turns included in each prompt.
    #[serde(default = "default_history_window")]
    pub history_window: usize,

    /// Index turns and search them for long-term context. Needs
    /// `indexing.api_key`.
    #[serde(default = "default_long_term_memory")]
    pub long_term_memory: bool,

    /// Label of the per-session collection.
    #[serde(default = "default_collection_label")]
    pub collection_label: String,

    /// Start the history with a greeting exchange.
    #[serde(default = "default_seed_conversation")]
    pub seed_conversation: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            preamble: default_preamble(),
            history_window: default_history_window(),
            long_term_memory: default_long_term_memory(),
            collection_label: default_collection_label(),
            seed_conversation: default_seed_conversation(),
        }
    }
}

fn default_preamble() -> String {
    "The following is a conversation with an AI assistant. The assistant is helpful, creative, clever, and very friendly.".to_string()
}

fn default_history_window() -> usize {
    5
}

fn default_long_term_memory() -> bool {
    true
}

fn default_collection_label() -> String {
    "ltm".to_string()
}

fn default_seed_conversation() -> bool {
    true
}
