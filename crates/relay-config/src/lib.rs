// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for the relay demos.
//!
//! One [`RelayConfig`] is built at startup from compiled defaults, TOML files
//! and environment variables, validated, and then handed by reference to the
//! flow that runs.
//!
//! ```no_run
//! use relay_config::load_and_validate;
//!
//! let config = load_and_validate(None).expect("config errors");
//! println!("listening on port {}", config.server.port);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::RelayConfig;

/// Load configuration (from `path` alone when given) and validate it.
pub fn load_and_validate(path: Option<&Path>) -> Result<RelayConfig, Vec<ConfigError>> {
    let loaded = match path {
        Some(path) => loader::load_config_from_path(path),
        None => loader::load_config(),
    };
    finish(loaded)
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<RelayConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_str(toml_content))
}

fn finish(loaded: Result<RelayConfig, figment::Error>) -> Result<RelayConfig, Vec<ConfigError>> {
    let config = loaded.map_err(diagnostic::figment_to_config_errors)?;
    validation::validate_config(&config)?;
    tracing::debug!(
        storage = config.storage.is_configured(),
        indexing_key = config.indexing.api_key.is_some(),
        "configuration loaded"
    );
    Ok(config)
}
