// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base trait implemented by every adapter.

use crate::types::AdapterType;

/// Identity shared by all adapters. Startup and ingest logs carry it as
/// `adapter`/`kind` fields.
pub trait Adapter: Send + Sync + 'static {
    /// Returns the human-readable name of this adapter instance.
    fn name(&self) -> &str;

    /// Returns the kind of service this adapter talks to.
    fn adapter_type(&self) -> AdapterType;
}
