// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered merging.
//!
//! Merge order (later overrides earlier):
//! 1. Compiled defaults
//! 2. `/etc/relay/relay.toml`, `~/.config/relay/relay.toml`, `./relay.toml`
//!    (or one explicit file)
//! 3. `RELAY_*` environment variables
//! 4. The unprefixed variables the demos have always read (`PORT`,
//!    `OPERAND_API_KEY`, `S3_BUCKET`, `OPENAI_KEY`, ...)
//!
//! Environment values for text keys are taken verbatim; the rest are parsed.

#![allow(clippy::result_large_err)] // figment::Error is external

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::RelayConfig;

/// Sections that `RELAY_<SECTION>_<KEY>` variables may address.
const SECTIONS: &[&str] = &["server", "indexing", "storage", "openai", "chat"];

/// Unprefixed environment variables and the config keys they set.
const LEGACY_ENV: &[(&str, &str)] = &[
    ("PORT", "server.port"),
    ("OPERAND_ENDPOINT", "indexing.endpoint"),
    ("OPERAND_API_KEY", "indexing.api_key"),
    ("OPERAND_PARENT_ID", "indexing.parent_id"),
    ("S3_ENDPOINT", "storage.endpoint"),
    ("S3_REGION", "storage.region"),
    ("S3_BUCKET", "storage.bucket"),
    ("S3_KEY", "storage.access_key"),
    ("S3_SECRET", "storage.secret_key"),
    ("OPENAI_KEY", "openai.api_key"),
];

/// Keys whose values are text. Figment's `Env` parses values, so an
/// all-digit secret or id would otherwise arrive as an integer.
const STRING_KEYS: &[&str] = &[
    "log_level",
    "server.bind_address",
    "indexing.endpoint",
    "indexing.api_key",
    "indexing.parent_id",
    "storage.endpoint",
    "storage.region",
    "storage.bucket",
    "storage.access_key",
    "storage.secret_key",
    "storage.key_prefix",
    "openai.api_key",
    "openai.base_url",
    "openai.engine",
    "chat.preamble",
    "chat.collection_label",
];

/// Candidate config files, lowest precedence first.
pub fn config_file_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("/etc/relay/relay.toml")];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("relay").join("relay.toml"));
    }
    paths.push(PathBuf::from("relay.toml"));
    paths
}

/// Build the Figment for the standard file hierarchy, or for `explicit` alone.
pub fn build_figment(explicit: Option<&Path>) -> Figment {
    let mut figment = Figment::new().merge(Serialized::defaults(RelayConfig::default()));
    match explicit {
        Some(path) => figment = figment.merge(Toml::file(path)),
        None => {
            for path in config_file_paths() {
                figment = figment.merge(Toml::file(path));
            }
        }
    }
    figment = merge_env(figment, prefixed_env());
    merge_env(figment, legacy_env())
}

/// Load configuration from the file hierarchy with env var overrides.
pub fn load_config() -> Result<RelayConfig, figment::Error> {
    build_figment(None).extract()
}

/// Load configuration from one file with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<RelayConfig, figment::Error> {
    build_figment(Some(path)).extract()
}

/// Load configuration from a TOML string only. No files, no environment.
pub fn load_config_from_str(toml_content: &str) -> Result<RelayConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RelayConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Maps `RELAY_<rest>` (already stripped and lowercased) to a dotted key.
///
/// Only the first segment is split off, so `storage_secret_key` becomes
/// `storage.secret_key` rather than `storage.secret.key`.
pub fn prefixed_key(rest: &str) -> String {
    let rest = rest.to_ascii_lowercase();
    for section in SECTIONS {
        if let Some(field) = rest
            .strip_prefix(section)
            .and_then(|tail| tail.strip_prefix('_'))
        {
            return format!("{section}.{field}");
        }
    }
    rest
}

/// Maps an unprefixed legacy variable name to its dotted key.
pub fn legacy_key(name: &str) -> Option<&'static str> {
    LEGACY_ENV
        .iter()
        .find(|(var, _)| var.eq_ignore_ascii_case(name))
        .map(|(_, key)| *key)
}

/// True when `key` holds text and must not be parsed as a number or bool.
pub fn is_string_key(key: &str) -> bool {
    STRING_KEYS.contains(&key)
}

/// Merges typed values through `env` and text values verbatim.
fn merge_env(figment: Figment, env: Env) -> Figment {
    let text: Vec<(String, String)> = env
        .clone()
        .filter(|key| is_string_key(key.as_str()))
        .iter()
        .map(|(key, value)| (key.into_string(), value))
        .collect();

    let figment = figment.merge(env.filter(|key| !is_string_key(key.as_str())));
    text.into_iter().fold(figment, |figment, (key, value)| {
        figment.merge(Serialized::default(&key, value))
    })
}

fn prefixed_env() -> Env {
    Env::prefixed("RELAY_").map(|key| prefixed_key(key.as_str()).into())
}

fn legacy_env() -> Env {
    let names: Vec<&str> = LEGACY_ENV.iter().map(|(var, _)| *var).collect();
    Env::raw().only(&names).map(|key| {
        legacy_key(key.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| key.as_str().to_string())
            .into()
    })
}
