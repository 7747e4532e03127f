// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Path-style S3 uploads with public-read ACL.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use relay_config::model::StorageConfig;
use relay_core::{Adapter, AdapterType, ObjectStore, RelayError};
use reqwest::Url;
use tracing::debug;

use crate::sigv4::{self, CanonicalRequest, Credentials};

/// Canned ACL applied to every upload.
const PUBLIC_READ: &str = "public-read";

/// Uploads attachments to an S3-compatible bucket.
#[derive(Debug, Clone)]
pub struct S3Store {
    client: reqwest::Client,
    endpoint: String,
    host: String,
    region: String,
    bucket: String,
    access_key: String,
    secret_key: String,
}

impl S3Store {
    /// Builds a store from the `[storage]` section.
    ///
    /// Fails unless every credential field is set.
    pub fn new(config: &StorageConfig) -> Result<Self, RelayError> {
        let (Some(endpoint), Some(region), Some(bucket), Some(access_key), Some(secret_key)) = (
            config.endpoint.as_deref(),
            config.region.as_deref(),
            config.bucket.as_deref(),
            config.access_key.as_deref(),
            config.secret_key.as_deref(),
        ) else {
            return Err(RelayError::Config(
                "storage requires endpoint, region, bucket, access_key and secret_key".into(),
            ));
        };
        if !config.is_configured() {
            return Err(RelayError::Config("storage settings must not be blank".into()));
        }

        let endpoint = endpoint.trim().trim_end_matches('/').to_string();
        let parsed = Url::parse(&endpoint)
            .map_err(|e| RelayError::Config(format!("invalid storage.endpoint `{endpoint}`: {e}")))?;
        let host = match (parsed.host_str(), parsed.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => {
                return Err(RelayError::Config(format!(
                    "storage.endpoint `{endpoint}` has no host"
                )));
            }
        };

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| RelayError::Storage {
            message: format!("failed to build HTTP client: {e}"),
            source: Some(Box::new(e)),
        })?;

        Ok(Self {
            client,
            endpoint,
            host,
            region: region.trim().to_string(),
            bucket: bucket.trim().to_string(),
            access_key: access_key.trim().to_string(),
            secret_key: secret_key.trim().to_string(),
        })
    }

    /// Public URL of the object stored under `key`.
    pub fn object_url(&self, key: &str) -> String {
        format!("{}{}", self.endpoint, self.object_path(key))
    }

    fn object_path(&self, key: &str) -> String {
        sigv4::uri_encode_path(&format!("/{}{key}", self.bucket))
    }
}

impl Adapter for S3Store {
    fn name(&self) -> &str {
        "s3"
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Storage
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put_public(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, RelayError> {
        let now = Utc::now();
        let amz_date = sigv4::amz_date(now);
        let payload_hash = sigv4::hex_sha256(&bytes);
        let path = self.object_path(key);

        let canonical = CanonicalRequest {
            method: "PUT",
            path: &path,
            headers: vec![
                ("content-type", content_type.to_string()),
                ("host", self.host.clone()),
                ("x-amz-acl", PUBLIC_READ.to_string()),
                ("x-amz-content-sha256", payload_hash.clone()),
                ("x-amz-date", amz_date.clone()),
            ],
            payload_hash: &payload_hash,
        };
        let credentials = Credentials {
            access_key: &self.access_key,
            secret_key: &self.secret_key,
            region: &self.region,
        };
        let authorization = sigv4::authorization(&canonical, &credentials, now)?;

        let url = self.object_url(key);
        let size = bytes.len();
        let response = self
            .client
            .put(&url)
            .header("authorization", authorization)
            .header("content-type", content_type)
            .header("x-amz-acl", PUBLIC_READ)
            .header("x-amz-content-sha256", payload_hash)
            .header("x-amz-date", amz_date)
            .body(bytes)
            .send()
            .await
            .map_err(|e| RelayError::Storage {
                message: format!("upload request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Storage {
                message: format!("upload of {key} returned {status}: {}", body.trim()),
                source: None,
            });
        }

        debug!(key, size, content_type, "attachment uploaded");
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> StorageConfig {
        StorageConfig {
            endpoint: Some("https://nyc3.digitaloceanspaces.com/".into()),
            region: Some("nyc3".into()),
            bucket: Some("media".into()),
            access_key: Some("AKID".into()),
            secret_key: Some("secret".into()),
            ..StorageConfig::default()
        }
    }

    #[test]
    fn url_is_endpoint_bucket_and_key() {
        let store = S3Store::new(&config()).unwrap();
        assert_eq!(
            store.object_url("/imessage/image/abc"),
            "https://nyc3.digitaloceanspaces.com/media/imessage/image/abc"
        );
        assert_eq!(store.host, "nyc3.digitaloceanspaces.com");
    }

    #[test]
    fn incomplete_config_is_rejected() {
        let mut partial = config();
        partial.secret_key = None;
        assert!(matches!(S3Store::new(&partial), Err(RelayError::Config(_))));

        let mut blank = config();
        blank.bucket = Some(String::new());
        assert!(S3Store::new(&blank).is_err());
    }

    #[test]
    fn host_keeps_explicit_port() {
        let mut local = config();
        local.endpoint = Some("http://127.0.0.1:9000".into());
        assert_eq!(S3Store::new(&local).unwrap().host, "127.0.0.1:9000");
    }
}
