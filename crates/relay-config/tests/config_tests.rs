// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the relay configuration system.

use relay_config::diagnostic::ConfigError;
use relay_config::{load_and_validate_str, load_config_from_str};

/// A file setting every section deserializes into the model.
#[test]
fn full_toml_deserializes() {
    let toml = r#"
log_level = "debug"

[server]
bind_address = "127.0.0.1"
port = 9000

[indexing]
endpoint = "http://localhost:7000"
api_key = "operand-key"
parent_id = "col-1"

[storage]
endpoint = "https://nyc3.digitaloceanspaces.com"
region = "nyc3"
bucket = "media"
access_key = "AKID"
secret_key = "shh"

[openai]
api_key = "sk-1"
engine = "text-curie-001"
max_tokens = 32

[chat]
history_window = 3
long_term_memory = false
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.indexing.parent_id.as_deref(), Some("col-1"));
    assert!(config.storage.is_configured());
    assert_eq!(config.storage.key_prefix, "imessage");
    assert_eq!(config.openai.engine, "text-curie-001");
    assert_eq!(config.openai.max_tokens, 32);
    assert_eq!(config.openai.temperature, 0.7);
    assert_eq!(config.chat.history_window, 3);
    assert!(!config.chat.long_term_memory);
}

/// An empty file yields every default.
#[test]
fn empty_toml_uses_defaults() {
    let config = load_config_from_str("").unwrap();
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.indexing.endpoint, "https://api.operand.ai");
    assert_eq!(config.indexing.search_max_results, 5);
    assert!(!config.storage.is_configured());
    assert_eq!(config.chat.collection_label, "ltm");
    assert!(config.chat.seed_conversation);
}

/// A misspelled key is reported with a suggestion.
#[test]
fn typo_in_server_section_suggests_fix() {
    let errors = load_and_validate_str("[server]\nprot = 1\n").unwrap_err();
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey { suggestion, .. } => {
            assert_eq!(suggestion.as_deref(), Some("port"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

/// Wrong value types are reported as InvalidType.
#[test]
fn wrong_type_is_reported() {
    let errors = load_and_validate_str("[server]\nport = \"eighty\"\n").unwrap_err();
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidType { key, .. } if key.contains("port"))),
        "got: {errors:?}"
    );
}

/// Out-of-range sampling parameters fail validation.
#[test]
fn validation_runs_after_deserialization() {
    let errors = load_and_validate_str("[openai]\ntop_p = 1.5\nmax_tokens = 0\n").unwrap_err();
    assert_eq!(errors.len(), 2, "got: {errors:?}");
    assert!(errors.iter().all(|e| matches!(e, ConfigError::Validation { .. })));
}

/// An explicit file path is honoured.
#[test]
fn explicit_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("relay.toml");
    std::fs::write(&path, "[chat]\ncollection_label = \"session\"\n").unwrap();

    let config = relay_config::load_and_validate(Some(&path)).unwrap();
    assert_eq!(config.chat.collection_label, "session");
}
