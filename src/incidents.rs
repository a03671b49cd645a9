//! Incident search and status transitions for the FortiDLP API.
//!
//! - [`search_incidents`] — POST `/api/v2/incidents/search` with paging
//!   in the query string and filter/include flags in the body.
//! - [`update_incident_status`] — POST `/api/v2/incidents/status`,
//!   targeting either an explicit filter or all incidents.

use serde::Serialize;
use serde_json::Value;

use crate::client::DlpClient;
use crate::error::Result;

/// Body for incident search. The `include_*` flags pull related
/// entities into each result.
#[derive(Debug, Clone, Serialize)]
pub struct IncidentSearchRequest {
    /// Opaque filter expressions; an empty list matches everything.
    pub filter: Vec<Value>,
    /// Include the agents involved in each incident.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_agents: Option<bool>,
    /// Include incident cluster data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_cluster_data: Option<bool>,
    /// Include labels attached to each incident.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_labels: Option<bool>,
    /// Include the users involved in each incident.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_users: Option<bool>,
}

impl Default for IncidentSearchRequest {
    /// All related entities included, matching the platform console's
    /// default search.
    fn default() -> Self {
        IncidentSearchRequest {
            filter: Vec::new(),
            include_agents: Some(true),
            include_cluster_data: Some(true),
            include_labels: Some(true),
            include_users: Some(true),
        }
    }
}

/// Incidents targeted by a status update: either everything or an
/// explicit filter. Mutually exclusive on the wire (`all` and `filter`
/// are never sent together), so the choice is an enum here.
#[derive(Debug, Clone)]
pub enum IncidentSelection {
    /// Update every incident.
    All,
    /// Update incidents matching the given filter expressions.
    Matching(Vec<Value>),
}

/// Body for the status endpoint.
#[derive(Debug, Clone, Serialize)]
struct UpdateStatusBody<'a> {
    status: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    all: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<&'a [Value]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
}

/// Searches incidents with paging.
///
/// # Errors
///
/// - `DlpError::Api` — non-success status.
/// - `DlpError::NotAuthenticated` — no session.
/// - `DlpError::Transport` — transport-level failure.
pub async fn search_incidents(
    client: &DlpClient,
    request: &IncidentSearchRequest,
    results_per_page: u32,
) -> Result<Value> {
    let path = format!("/api/v2/incidents/search?results_per_page={results_per_page}");
    client.send(&path, Some(request)).await
}

/// Transitions the selected incidents to a new status (e.g.
/// `"RESOLVE"`), with an optional reason recorded in the audit log.
pub async fn update_incident_status(
    client: &DlpClient,
    status: &str,
    selection: &IncidentSelection,
    reason: Option<&str>,
) -> Result<Value> {
    let body = match selection {
        IncidentSelection::All => UpdateStatusBody {
            status,
            all: Some(true),
            filter: None,
            reason,
        },
        IncidentSelection::Matching(filter) => UpdateStatusBody {
            status,
            all: None,
            filter: Some(filter),
            reason,
        },
    };
    client.send("/api/v2/incidents/status", Some(&body)).await
}
