//! Label management for the FortiDLP API.
//!
//! - [`create_label`] — POST `/api/v1/labels`.
//! - [`delete_label`] — DELETE `/api/v1/labels/{id}`.
//! - [`search_labels`] — POST `/api/v1/labels/search` with paging.
//!
//! Label search is a POST (the filter travels in the body) with paging
//! controls in the query string, matching the platform's search-endpoint
//! convention.

use serde::Serialize;
use serde_json::Value;

use crate::client::DlpClient;
use crate::error::Result;

/// Body for label creation. Only `name` is mandatory; omitted optional
/// fields are absent from the JSON entirely so the server applies its
/// own defaults.
#[derive(Debug, Clone, Serialize)]
pub struct CreateLabelRequest {
    /// Label name.
    pub name: String,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Label category (e.g. `"DIRECTORY"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Whether matches under this label are anonymised.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anonymise: Option<bool>,

    /// Whether the label is flagged for attention.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flagged: Option<bool>,
}

impl CreateLabelRequest {
    /// Request carrying only the mandatory name.
    pub fn new(name: impl Into<String>) -> Self {
        CreateLabelRequest {
            name: name.into(),
            description: None,
            category: None,
            anonymise: None,
            flagged: None,
        }
    }
}

/// Body for label search. Filter items are opaque platform filter
/// expressions.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LabelSearchRequest {
    /// Filter expressions to apply; an empty list matches everything.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter: Vec<Value>,
}

/// Creates a label.
///
/// # Errors
///
/// - `DlpError::Api` — non-success status (409 duplicate name surfaces
///   with its raw body).
/// - `DlpError::NotAuthenticated` — no session.
/// - `DlpError::Transport` — transport-level failure.
pub async fn create_label(client: &DlpClient, request: &CreateLabelRequest) -> Result<Value> {
    client.send("/api/v1/labels", Some(request)).await
}

/// Deletes a label by ID.
pub async fn delete_label(client: &DlpClient, label_id: &str) -> Result<Value> {
    client.delete(&format!("/api/v1/labels/{label_id}")).await
}

/// Searches labels with paging controls.
///
/// `sort_order` is `"asc"` or `"desc"`; `cursor` continues a previous
/// page when the response supplied one.
pub async fn search_labels(
    client: &DlpClient,
    request: &LabelSearchRequest,
    results_per_page: u32,
    sort_order: &str,
    cursor: Option<&str>,
) -> Result<Value> {
    let mut path =
        format!("/api/v1/labels/search?results_per_page={results_per_page}&sort_order={sort_order}");
    if let Some(cursor) = cursor {
        path = format!("{path}&cursor={cursor}");
    }
    client.send(&path, Some(request)).await
}
