// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Object storage adapter for the relay demos.

pub mod s3;
pub mod sigv4;

pub use s3::S3Store;
