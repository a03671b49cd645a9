//! Integration tests for the dispatch primitives using wiremock.
//!
//! These exercise the shared request/classify path directly through the
//! raw `get`/`send`/`insert`/`delete`/`download` surface rather than the
//! resource catalog: outcome classification, header merging, the
//! not-authenticated precondition, and non-JSON bodies.

use fortidlp::{DlpClient, DlpError};
use wiremock::matchers::{body_json, body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper: mounts the probe mock and returns an authenticated client.
async fn authed_client(server: &MockServer) -> DlpClient {
    Mock::given(method("GET"))
        .and(path("/api/v2/users/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(server)
        .await;

    let mut client = DlpClient::new();
    client.authenticate(&server.uri(), "test-token").await.unwrap();
    client
}

// ── Precondition: no session ───────────────────────────────────────────

#[tokio::test]
async fn dispatch_before_authenticate_is_not_authenticated() {
    let client = DlpClient::new();

    let get = client.get("/api/v1/users", None).await;
    assert!(matches!(get, Err(DlpError::NotAuthenticated)));

    let send = client.send::<()>("/api/v1/labels", None).await;
    assert!(matches!(send, Err(DlpError::NotAuthenticated)));

    let insert = client.insert::<()>("/api/v1/admin/agents/labels/add", None).await;
    assert!(matches!(insert, Err(DlpError::NotAuthenticated)));

    let delete = client.delete("/api/v1/cases/c-1").await;
    assert!(matches!(delete, Err(DlpError::NotAuthenticated)));

    let download = client.download::<()>("/api/v1/policies/export", None).await;
    assert!(matches!(download, Err(DlpError::NotAuthenticated)));
}

// ── Outcome classification ─────────────────────────────────────────────

#[tokio::test]
async fn delete_sends_no_body_and_returns_parsed_json() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/cases/c-42"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"deleted": true})))
        .mount(&server)
        .await;

    let body = client.delete("/api/v1/cases/c-42").await.unwrap();
    assert_eq!(body["deleted"], true);
}

#[tokio::test]
async fn delete_on_server_error_is_classified() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/cases/c-1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("stack trace here"))
        .mount(&server)
        .await;

    let err = client.delete("/api/v1/cases/c-1").await.unwrap_err();
    match err {
        DlpError::Api { status, reason } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(reason, "Internal Server Error");
        }
        other => panic!("expected Api error, got: {other}"),
    }
}

#[tokio::test]
async fn unclassified_failure_carries_raw_body() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .respond_with(
            ResponseTemplate::new(422).set_body_string(r#"{"error":"bad filter expression"}"#),
        )
        .mount(&server)
        .await;

    let err = client.get("/api/v1/users", None).await.unwrap_err();
    assert!(
        err.to_string().contains("bad filter expression"),
        "raw body must survive for unclassified statuses, got: {err}"
    );
}

#[tokio::test]
async fn non_json_success_body_is_returned_as_string() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("plain text payload"))
        .mount(&server)
        .await;

    let body = client.get("/api/v1/users", None).await.unwrap();
    assert_eq!(body, serde_json::Value::String("plain text payload".to_string()));
}

#[tokio::test]
async fn empty_success_body_is_ok() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    // 204-style responses have no body at all.
    Mock::given(method("DELETE"))
        .and(path("/api/v1/labels/l-1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let body = client.delete("/api/v1/labels/l-1").await.unwrap();
    assert_eq!(body, serde_json::Value::String(String::new()));
}

// ── Header merging and wire shape ──────────────────────────────────────

#[tokio::test]
async fn dispatch_merges_session_headers() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/operators"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"operators": []})))
        .mount(&server)
        .await;

    let body = client.get("/api/v1/operators", None).await.unwrap();
    assert!(body["operators"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn get_serializes_query_pairs() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/cases"))
        .and(wiremock::matchers::query_param("created_by", "jo.admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"cases": []})))
        .mount(&server)
        .await;

    let query = [("created_by", "jo.admin")];
    let result = client.get("/api/v1/cases", Some(&query)).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn send_posts_json_body() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/v2/agents/state"))
        .and(body_json(serde_json::json!({"new_state": "DISABLED"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"updated": 3})))
        .mount(&server)
        .await;

    let body = serde_json::json!({"new_state": "DISABLED"});
    let result = client.send("/api/v2/agents/state", Some(&body)).await.unwrap();
    assert_eq!(result["updated"], 3);
}

#[tokio::test]
async fn download_returns_raw_bytes() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    let archive = b"PK\x03\x04 not actually a zip".to_vec();
    Mock::given(method("POST"))
        .and(path("/api/v1/policies/export"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(archive.clone()))
        .mount(&server)
        .await;

    let bytes = client
        .download("/api/v1/policies/export", Some(&serde_json::json!({})))
        .await
        .unwrap();
    assert_eq!(bytes.as_ref(), archive.as_slice());
}

#[tokio::test]
async fn download_failure_is_classified_like_json_primitives() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/policies/export"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = client
        .download("/api/v1/policies/export", Some(&serde_json::json!({})))
        .await
        .unwrap_err();
    assert!(
        err.to_string().contains("Forbidden"),
        "expected Forbidden classification, got: {err}"
    );
}
