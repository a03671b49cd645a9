//! Audit log retrieval for the FortiDLP API.
//!
//! A single search endpoint: POST `/api/v1/audit/search` with paging in
//! the query string and the filter criteria in the body.

use serde::Serialize;
use serde_json::Value;

use crate::client::DlpClient;
use crate::error::Result;

/// Time window for an audit search.
///
/// The wire contract is asymmetric: the lower bound key is `start_time`
/// but the upper bound key is `to`. Preserved as-is.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TimeRange {
    /// Window start, ISO 8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,

    /// Window end, ISO 8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl TimeRange {
    fn is_empty(&self) -> bool {
        self.start_time.is_none() && self.to.is_none()
    }
}

/// Body for the audit search endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditSearchRequest {
    /// Opaque filter expressions.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter: Vec<Value>,

    /// Time window; omitted when neither bound is set.
    #[serde(skip_serializing_if = "TimeRange::is_empty")]
    pub time_range: TimeRange,

    /// Operation types to include (e.g. `"LOGIN"`, `"POLICY_UPDATE"`).
    #[serde(rename = "types", skip_serializing_if = "Vec::is_empty")]
    pub operation_types: Vec<String>,
}

/// Searches the tenant audit log.
///
/// `sort_order` is `"asc"` or `"desc"` over the event timestamp.
///
/// # Errors
///
/// - `DlpError::Api` — non-success status.
/// - `DlpError::NotAuthenticated` — no session.
/// - `DlpError::Transport` — transport-level failure.
pub async fn search_audit_logs(
    client: &DlpClient,
    request: &AuditSearchRequest,
    results_per_page: u32,
    sort_order: &str,
) -> Result<Value> {
    let path =
        format!("/api/v1/audit/search?results_per_page={results_per_page}&sort_order={sort_order}");
    client.send(&path, Some(request)).await
}
