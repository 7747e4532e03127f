// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests of the webhook router with mock adapters.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use axum::http::{Request, StatusCode};
use relay_core::{ObjectMetadata, ObjectType};
use relay_gateway::{router, GatewayState, Ingester};
use relay_test_utils::{MockIndexer, MockObjectStore};
use serde_json::{json, Value};
use tower::ServiceExt;
use tracing_test::traced_test;

struct Harness {
    indexer: MockIndexer,
    store: MockObjectStore,
    state: GatewayState,
}

fn harness(indexer: MockIndexer, store: Option<MockObjectStore>, parent_id: Option<&str>) -> Harness {
    let recorded_store = store.clone().unwrap_or_default();
    let ingester = Ingester::new(
        Arc::new(indexer.clone()),
        store.map(|s| Arc::new(s) as Arc<dyn relay_core::ObjectStore>),
        parent_id.map(str::to_string),
        "imessage",
    );
    Harness {
        indexer,
        store: recorded_store,
        state: GatewayState::new(ingester),
    }
}

async fn post(state: &GatewayState, body: impl Into<Body>) -> (StatusCode, Value) {
    let response = router(state.clone())
        .oneshot(Request::post("/").body(body.into()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
#[traced_test]
async fn ingest_log_names_the_indexer() {
    let h = harness(MockIndexer::new(), None, None);
    let (status, _) = post(&h.state, json!({"from": "alice", "message": "hi"}).to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(logs_contain("message ingested"));
    assert!(logs_contain("indexer=mock-indexer"));
}

#[tokio::test]
async fn text_message_is_indexed_with_sender_and_label() {
    let h = harness(MockIndexer::new(), None, None);
    let (status, body) = post(&h.state, json!({"from": "alice", "message": "hi\u{7}"}).to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"indexed": 1}));

    let created = h.indexer.created().await;
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].metadata, ObjectMetadata::Text { text: "hi".into() });
    assert_eq!(created[0].properties.get("from").map(String::as_str), Some("alice"));
    let label = created[0].label.as_deref().unwrap();
    assert!(label.parse::<i64>().unwrap() > 1_600_000_000);
    assert_eq!(created[0].parent_id, None);
}

#[tokio::test]
async fn empty_message_without_attachment_indexes_nothing() {
    let h = harness(MockIndexer::new(), Some(MockObjectStore::new()), None);
    let (status, body) = post(&h.state, r#"{"from":"alice","message":"\u0000\t"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"indexed": 0}));
    assert!(h.indexer.created().await.is_empty());
}

#[tokio::test]
async fn image_is_uploaded_then_indexed_after_text() {
    let h = harness(MockIndexer::new(), Some(MockObjectStore::new()), Some("col-7"));
    let payload = json!({
        "from": "alice",
        "message": "look",
        "attachment": "iVBORw0K",
        "attachment_type": "image/png"
    });
    let (status, body) = post(&h.state, payload.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"indexed": 2}));

    let uploads = h.store.uploads().await;
    assert_eq!(uploads.len(), 1);
    assert!(uploads[0].key.starts_with("/imessage/image/"));
    assert_eq!(uploads[0].content_type, "image/png");
    assert_eq!(uploads[0].bytes, vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a]);

    let created = h.indexer.created().await;
    assert_eq!(created[0].object_type(), ObjectType::Text);
    assert_eq!(created[1].object_type(), ObjectType::Image);
    assert_eq!(
        created[1].metadata,
        ObjectMetadata::Image {
            image_url: format!("https://storage.test/media{}", uploads[0].key)
        }
    );
    assert!(created.iter().all(|r| r.parent_id.as_deref() == Some("col-7")));
}

#[tokio::test]
async fn multi_megabyte_attachment_is_uploaded() {
    let h = harness(MockIndexer::new(), Some(MockObjectStore::new()), None);
    let photo: Vec<u8> = (0..3 * 1024 * 1024).map(|i| (i % 251) as u8).collect();
    let payload = json!({
        "from": "alice",
        "message": "vacation",
        "attachment": STANDARD.encode(&photo),
        "attachment_type": "image/jpeg"
    });
    let (status, body) = post(&h.state, payload.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"indexed": 2}));
    let uploads = h.store.uploads().await;
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].bytes.len(), photo.len());
}

#[tokio::test]
async fn body_over_configured_limit_is_rejected_with_json_error() {
    let h = harness(MockIndexer::new(), Some(MockObjectStore::new()), None);
    let state = h.state.clone().with_max_body_bytes(1024);
    let payload = json!({
        "from": "alice",
        "message": "big",
        "attachment": STANDARD.encode(vec![7u8; 4096]),
        "attachment_type": "image/png"
    });
    let (status, body) = post(&state, payload.to_string()).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(body["error"].is_string());
    assert!(h.store.uploads().await.is_empty());
    assert!(h.indexer.created().await.is_empty());
}

#[tokio::test]
async fn pdf_attachment_becomes_pdf_object() {
    let h = harness(MockIndexer::new(), Some(MockObjectStore::new()), None);
    let payload = json!({"from": "bob", "message": "", "attachment": "JVBERg==", "attachment_type": "application/pdf"});
    let (status, body) = post(&h.state, payload.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"indexed": 1}));
    let created = h.indexer.created().await;
    assert_eq!(created[0].object_type(), ObjectType::Pdf);
    assert!(h.store.uploads().await[0].key.starts_with("/imessage/pdf/"));
}

#[tokio::test]
#[traced_test]
async fn unsupported_attachment_is_skipped_with_warning() {
    let h = harness(MockIndexer::new(), Some(MockObjectStore::new()), None);
    let payload = json!({"from": "alice", "message": "gif!", "attachment": "R0lGODlh", "attachment_type": "image/gif"});
    let (status, body) = post(&h.state, payload.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"indexed": 1}));
    assert!(h.store.uploads().await.is_empty());
    assert_eq!(h.indexer.created().await.len(), 1);
    assert!(logs_contain("got unsupported attachment type"));
}

#[tokio::test]
async fn attachment_is_ignored_without_storage() {
    let h = harness(MockIndexer::new(), None, None);
    let payload = json!({"from": "alice", "message": "", "attachment": "AQID", "attachment_type": "image/jpeg"});
    let (status, body) = post(&h.state, payload.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"indexed": 0}));
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let h = harness(MockIndexer::new(), None, None);
    let (status, body) = post(&h.state, "{\"from\": ").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("invalid payload"));
    assert!(h.indexer.created().await.is_empty());
}

#[tokio::test]
async fn text_failure_stops_before_upload() {
    let h = harness(MockIndexer::new().failing_on_create(0), Some(MockObjectStore::new()), None);
    let payload = json!({"from": "alice", "message": "hi", "attachment": "AQID", "attachment_type": "image/png"});
    let (status, body) = post(&h.state, payload.to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("unexpected status code"));
    assert!(h.store.uploads().await.is_empty());
}

#[tokio::test]
async fn upload_failure_is_server_error() {
    let indexer = MockIndexer::new();
    let ingester = Ingester::new(
        Arc::new(indexer.clone()),
        Some(Arc::new(MockObjectStore::failing())),
        None,
        "imessage",
    );
    let state = GatewayState::new(ingester);
    let payload = json!({"from": "alice", "message": "hi", "attachment": "AQID", "attachment_type": "image/png"});
    let (status, _) = post(&state, payload.to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(indexer.created().await.len(), 1);
}

#[tokio::test]
async fn health_reports_storage() {
    let with = harness(MockIndexer::new(), Some(MockObjectStore::new()), None);
    let without = harness(MockIndexer::new(), None, None);

    for (h, expected) in [(with, true), (without, false)] {
        let response = router(h.state.clone())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["storage"], expected);
    }
}
