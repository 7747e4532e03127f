// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! AWS Signature Version 4 for single-request S3 uploads.
//!
//! Only what a path-style `PUT` needs: no query strings, no chunked payloads.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use relay_core::RelayError;
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";
const SERVICE: &str = "s3";

/// Credentials and scope for one signature.
#[derive(Debug, Clone)]
pub struct Credentials<'a> {
    pub access_key: &'a str,
    pub secret_key: &'a str,
    pub region: &'a str,
}

/// A request ready to be signed. Header names must be lowercase.
#[derive(Debug)]
pub struct CanonicalRequest<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub headers: Vec<(&'a str, String)>,
    pub payload_hash: &'a str,
}

impl CanonicalRequest<'_> {
    /// Semicolon-joined, sorted header names.
    pub fn signed_headers(&self) -> String {
        let mut names: Vec<&str> = self.headers.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.join(";")
    }

    /// The canonical request string.
    pub fn render(&self) -> String {
        let mut headers: Vec<&(&str, String)> = self.headers.iter().collect();
        headers.sort_by(|a, b| a.0.cmp(b.0));
        let canonical_headers: String = headers
            .iter()
            .map(|(name, value)| format!("{name}:{}\n", value.trim()))
            .collect();
        format!(
            "{}\n{}\n\n{}\n{}\n{}",
            self.method,
            self.path,
            canonical_headers,
            self.signed_headers(),
            self.payload_hash
        )
    }
}

pub fn amz_date(at: DateTime<Utc>) -> String {
    at.format("%Y%m%dT%H%M%SZ").to_string()
}

fn short_date(at: DateTime<Utc>) -> String {
    at.format("%Y%m%d").to_string()
}

pub fn hex_sha256(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

fn hmac(key: &[u8], data: &[u8]) -> Result<Vec<u8>, RelayError> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|e| RelayError::Storage {
        message: format!("invalid signing key: {e}"),
        source: None,
    })?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Derives the per-day signing key.
pub fn signing_key(
    secret_key: &str,
    date: &str,
    region: &str,
    service: &str,
) -> Result<Vec<u8>, RelayError> {
    let k_date = hmac(format!("AWS4{secret_key}").as_bytes(), date.as_bytes())?;
    let k_region = hmac(&k_date, region.as_bytes())?;
    let k_service = hmac(&k_region, service.as_bytes())?;
    hmac(&k_service, b"aws4_request")
}

fn scope(at: DateTime<Utc>, region: &str) -> String {
    format!("{}/{region}/{SERVICE}/aws4_request", short_date(at))
}

pub fn string_to_sign(request: &CanonicalRequest<'_>, at: DateTime<Utc>, region: &str) -> String {
    format!(
        "{ALGORITHM}\n{}\n{}\n{}",
        amz_date(at),
        scope(at, region),
        hex_sha256(request.render().as_bytes())
    )
}

/// The `Authorization` header value for `request` signed at `at`.
pub fn authorization(
    request: &CanonicalRequest<'_>,
    credentials: &Credentials<'_>,
    at: DateTime<Utc>,
) -> Result<String, RelayError> {
    let key = signing_key(credentials.secret_key, &short_date(at), credentials.region, SERVICE)?;
    let signature = hex::encode(hmac(
        &key,
        string_to_sign(request, at, credentials.region).as_bytes(),
    )?);
    Ok(format!(
        "{ALGORITHM} Credential={}/{}, SignedHeaders={}, Signature={signature}",
        credentials.access_key,
        scope(at, credentials.region),
        request.signed_headers()
    ))
}

/// Percent-encodes a path, leaving unreserved characters and `/` intact.
pub fn uri_encode_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for byte in path.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
