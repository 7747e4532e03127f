// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization checks that serde attributes cannot express.

use crate::diagnostic::ConfigError;
use crate::model::RelayConfig;

/// Validate a deserialized configuration.
///
/// Collects every problem instead of stopping at the first one.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    let addr = config.server.bind_address.trim();
    if addr.is_empty() {
        fail("server.bind_address must not be empty".to_string());
    } else if addr.parse::<std::net::IpAddr>().is_err()
        && !addr
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        fail(format!(
            "server.bind_address `{addr}` is not a valid IP address or hostname"
        ));
    }

    if config.server.max_body_bytes == 0 {
        fail("server.max_body_bytes must be greater than 0".to_string());
    }

    if !is_http_url(&config.indexing.endpoint) {
        fail(format!(
            "indexing.endpoint must be an http(s) URL, got `{}`",
            config.indexing.endpoint
        ));
    }
    if config.indexing.poll_interval_ms == 0 {
        fail("indexing.poll_interval_ms must be greater than 0".to_string());
    }
    if config.indexing.search_max_results == 0 {
        fail("indexing.search_max_results must be at least 1".to_string());
    }

    if let Some(endpoint) = config
        .storage
        .endpoint
        .as_deref()
        .filter(|e| !e.trim().is_empty() && !is_http_url(e))
    {
        fail(format!(
            "storage.endpoint must be an http(s) URL, got `{endpoint}`"
        ));
    }
    if config.storage.key_prefix.contains('/') {
        fail("storage.key_prefix must be a single path segment".to_string());
    }

    if !is_http_url(&config.openai.base_url) {
        fail(format!(
            "openai.base_url must be an http(s) URL, got `{}`",
            config.openai.base_url
        ));
    }
    if config.openai.engine.trim().is_empty() {
        fail("openai.engine must not be empty".to_string());
    }
    if !(0.0..=2.0).contains(&config.openai.temperature) {
        fail(format!(
            "openai.temperature must be between 0 and 2, got {}",
            config.openai.temperature
        ));
    }
    if !(0.0..=1.0).contains(&config.openai.top_p) {
        fail(format!(
            "openai.top_p must be between 0 and 1, got {}",
            config.openai.top_p
        ));
    }
    if config.openai.max_tokens == 0 {
        fail("openai.max_tokens must be at least 1".to_string());
    }

    if config.chat.history_window == 0 {
        fail("chat.history_window must be at least 1".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_http_url(value: &str) -> bool {
    let value = value.trim();
    value.starts_with("http://") || value.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(config: &RelayConfig) -> Vec<String> {
        validate_config(config)
            .unwrap_err()
            .into_iter()
            .map(|e| e.to_string())
            .collect()
    }

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&RelayConfig::default()).is_ok());
    }

    #[test]
    fn bad_endpoint_fails_validation() {
        let mut config = RelayConfig::default();
        config.indexing.endpoint = "api.operand.ai".to_string();
        assert!(messages(&config).iter().any(|m| m.contains("indexing.endpoint")));
    }

    #[test]
    fn collects_every_error() {
        let mut config = RelayConfig::default();
        config.server.bind_address = " ".to_string();
        config.openai.temperature = 3.5;
        config.chat.history_window = 0;
        let errors = messages(&config);
        assert_eq!(errors.len(), 3, "got: {errors:?}");
    }

    #[test]
    fn zero_body_limit_fails_validation() {
        let mut config = RelayConfig::default();
        config.server.max_body_bytes = 0;
        assert!(messages(&config).iter().any(|m| m.contains("server.max_body_bytes")));
    }

    #[test]
    fn partial_storage_is_not_an_error() {
        let mut config = RelayConfig::default();
        config.storage.bucket = Some("media".to_string());
        assert!(validate_config(&config).is_ok());
        assert!(!config.storage.is_configured());
    }

    #[test]
    fn storage_endpoint_must_be_url() {
        let mut config = RelayConfig::default();
        config.storage.endpoint = Some("s3.example.com".to_string());
        assert!(messages(&config).iter().any(|m| m.contains("storage.endpoint")));
    }
}
