//! Case listing and deletion for the FortiDLP API.

use serde_json::Value;

use crate::client::DlpClient;
use crate::error::Result;

/// Lists cases, optionally narrowed by event URI, content operator, or
/// creator. All three filters are server-side query parameters.
///
/// # Errors
///
/// - `DlpError::Api` — non-success status.
/// - `DlpError::NotAuthenticated` — no session.
/// - `DlpError::Transport` — transport-level failure.
pub async fn list_cases(
    client: &DlpClient,
    content_event_uri: Option<&str>,
    content_operated_by: Option<&str>,
    created_by: Option<&str>,
) -> Result<Value> {
    let mut query: Vec<(&str, &str)> = Vec::new();
    if let Some(uri) = content_event_uri {
        query.push(("content_event_uri", uri));
    }
    if let Some(operator) = content_operated_by {
        query.push(("content_operated_by", operator));
    }
    if let Some(creator) = created_by {
        query.push(("created_by", creator));
    }

    let query = if query.is_empty() {
        None
    } else {
        Some(query.as_slice())
    };
    client.get("/api/v1/cases", query).await
}

/// Deletes a case by ID.
pub async fn delete_case(client: &DlpClient, case_id: &str) -> Result<Value> {
    client.delete(&format!("/api/v1/cases/{case_id}")).await
}
