// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `relay serve`: wires the adapters into the webhook ingester.

use std::sync::Arc;

use relay_config::RelayConfig;
use relay_core::{Adapter, Indexer, ObjectStore, RelayError};
use relay_gateway::{start_server, GatewayState, Ingester};
use relay_index::IndexClient;
use relay_storage::S3Store;
use tracing::{info, warn};

pub async fn run_serve(config: &RelayConfig) -> Result<(), RelayError> {
    info!("starting relay serve");

    let indexer: Arc<dyn Indexer> = Arc::new(IndexClient::new(&config.indexing)?);
    info!(adapter = %indexer.name(), kind = %indexer.adapter_type(), "indexer ready");

    let store: Option<Arc<dyn ObjectStore>> = if config.storage.is_configured() {
        let store = S3Store::new(&config.storage)?;
        info!(
            adapter = %store.name(),
            kind = %store.adapter_type(),
            url = %store.object_url("/"),
            "attachments upload to object storage"
        );
        Some(Arc::new(store))
    } else {
        warn!("object storage not configured, attachments will be ignored");
        None
    };

    let ingester = Ingester::new(
        indexer,
        store,
        config.indexing.parent_id.clone(),
        config.storage.key_prefix.clone(),
    );
    let state = GatewayState::new(ingester).with_max_body_bytes(config.server.max_body_bytes);
    start_server(&config.server, state).await
}
