//! Integration tests for the remaining catalog families (audit, cases,
//! operators, users) using wiremock.

use fortidlp::audit::{search_audit_logs, AuditSearchRequest, TimeRange};
use fortidlp::cases::{delete_case, list_cases};
use fortidlp::operators::{
    create_operator, delete_operator, list_operators, CreateOperatorRequest, Operator,
};
use fortidlp::users::{create_user, list_users, CreateUserRequest};
use fortidlp::DlpClient;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn authed_client(server: &MockServer) -> DlpClient {
    Mock::given(method("GET"))
        .and(path("/api/v2/users/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(server)
        .await;

    let mut client = DlpClient::new();
    client.authenticate(&server.uri(), "good-token").await.unwrap();
    client
}

// ── Audit ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn audit_search_sends_time_range_and_paging() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/audit/search"))
        .and(query_param("results_per_page", "100"))
        .and(query_param("sort_order", "desc"))
        .and(body_json(serde_json::json!({
            "time_range": {"start_time": "2026-01-01T00:00:00Z", "to": "2026-02-01T00:00:00Z"},
            "types": ["LOGIN"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "logs": [{"operation": "LOGIN", "operator": "jo.admin"}]
        })))
        .mount(&server)
        .await;

    let request = AuditSearchRequest {
        time_range: TimeRange {
            start_time: Some("2026-01-01T00:00:00Z".to_string()),
            to: Some("2026-02-01T00:00:00Z".to_string()),
        },
        operation_types: vec!["LOGIN".to_string()],
        ..Default::default()
    };
    let logs = search_audit_logs(&client, &request, 100, "desc").await.unwrap();
    assert_eq!(logs["logs"][0]["operator"], "jo.admin");
}

// ── Cases ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_cases_passes_filters_as_query_params() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/cases"))
        .and(query_param("created_by", "jo.admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cases": [{"id": "case-1"}]
        })))
        .mount(&server)
        .await;

    let cases = list_cases(&client, None, None, Some("jo.admin")).await.unwrap();
    assert_eq!(cases["cases"][0]["id"], "case-1");
}

#[tokio::test]
async fn list_cases_without_filters_sends_no_query() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/cases"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"cases": []})))
        .mount(&server)
        .await;

    let result = list_cases(&client, None, None, None).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn delete_case_hits_id_path() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/cases/case-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    assert!(delete_case(&client, "case-1").await.is_ok());
}

// ── Operators ──────────────────────────────────────────────────────────

#[tokio::test]
async fn operator_lifecycle() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/operators"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "operators": [{"id": "op-1", "name": "jo.admin"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/operators"))
        .and(body_json(serde_json::json!({
            "operator": {
                "company": "Example Corp",
                "display_name": "Jo Admin",
                "email": "jo@example.com",
                "name": "jo.admin",
                "roles": ["administrator"]
            },
            "passphrase": "initial-passphrase",
            "passphrase_reset_link_expiry_duration": 1,
            "passphrase_reset_on_login": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "op-1"})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/operators/op-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let request = CreateOperatorRequest {
        operator: Operator {
            company: "Example Corp".to_string(),
            display_name: "Jo Admin".to_string(),
            email: "jo@example.com".to_string(),
            name: "jo.admin".to_string(),
            roles: vec!["administrator".to_string()],
        },
        passphrase: "initial-passphrase".to_string(),
        passphrase_reset_link_expiry_duration: 1,
        passphrase_reset_on_login: true,
    };

    let created = create_operator(&client, &request).await.unwrap();
    assert_eq!(created["id"], "op-1");

    let operators = list_operators(&client).await.unwrap();
    assert_eq!(operators["operators"][0]["name"], "jo.admin");

    assert!(delete_operator(&client, "op-1").await.is_ok());
}

// ── Users ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_users_hits_v1_endpoint() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "users": [{"name": "John Smith"}]
        })))
        .mount(&server)
        .await;

    let users = list_users(&client).await.unwrap();
    assert_eq!(users["users"][0]["name"], "John Smith");
}

#[tokio::test]
async fn create_user_omits_unset_fields() {
    let server = MockServer::start().await;
    let client = authed_client(&server).await;

    // Only the fields that were set appear in the body.
    Mock::given(method("POST"))
        .and(path("/api/v1/admin/users"))
        .and(body_json(serde_json::json!({
            "name": "John Smith",
            "email": "john.smith@example.com",
            "department": "Accounting"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"juid": "u-1"})))
        .mount(&server)
        .await;

    let request = CreateUserRequest {
        name: Some("John Smith".to_string()),
        email: Some("john.smith@example.com".to_string()),
        department: Some("Accounting".to_string()),
        ..Default::default()
    };
    let user = create_user(&client, &request).await.unwrap();
    assert_eq!(user["juid"], "u-1");
}
