//! Agent fleet management for the FortiDLP API.
//!
//! Covers the agent endpoint family:
//!
//! - [`search_agents`] — POST `/api/v2/agents/search` with paging.
//! - [`update_agent_state`] — POST `/api/v2/agents/state`.
//! - [`delete_archived_agents`] — bulk deletion of archived/inactive
//!   agents via the admin endpoint.
//! - [`assign_labels`] / [`unassign_labels`] — bulk label membership on
//!   agents. These, like archived deletion, go through the `insert`
//!   primitive rather than `send`.
//!
//! Agent configuration profiles live under the same family:
//!
//! - [`list_agent_configs`] / [`delete_agent_config`] on
//!   `/api/v1/agent-configs`.

use serde::Serialize;
use serde_json::Value;

use crate::client::DlpClient;
use crate::error::Result;

/// Body for agent search.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AgentSearchRequest {
    /// Opaque filter expressions.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter: Vec<Value>,
    /// Continuation cursor from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// Body for the agent state endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateAgentStateRequest {
    /// Target state (e.g. `"DISABLED"`).
    pub new_state: String,
    /// Reason recorded in the audit log.
    pub reason: String,
    /// Agents to update; an empty filter is omitted from the body.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter: Vec<Value>,
}

/// Body for archived agent deletion. `agent_ids` is mandatory; the
/// remaining criteria further narrow which of those agents qualify.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteArchivedAgentsRequest {
    /// Agents considered for deletion.
    pub agent_ids: Vec<String>,
    /// Only delete agents archived at least this long, e.g. `"30"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived_days: Option<String>,
    /// Only delete agents inactive at least this many days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive_days: Option<u32>,
    /// Only delete agents that never reported in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub never_reported: Option<bool>,
    /// Only delete agents revoked at least this long.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoked_days: Option<String>,
}

/// Body shared by the label assign/unassign endpoints.
#[derive(Debug, Clone, Serialize)]
struct AgentLabelsBody<'a> {
    agent_ids: &'a [String],
    label_ids: &'a [String],
}

/// Searches agents with paging.
///
/// `sort_order` is `"asc"` or `"desc"`.
///
/// # Errors
///
/// - `DlpError::Api` — non-success status.
/// - `DlpError::NotAuthenticated` — no session.
/// - `DlpError::Transport` — transport-level failure.
pub async fn search_agents(
    client: &DlpClient,
    request: &AgentSearchRequest,
    results_per_page: u32,
    sort_order: &str,
) -> Result<Value> {
    let path =
        format!("/api/v2/agents/search?results_per_page={results_per_page}&sort_order={sort_order}");
    client.send(&path, Some(request)).await
}

/// Moves the agents matching the request's filter to a new state.
pub async fn update_agent_state(
    client: &DlpClient,
    request: &UpdateAgentStateRequest,
) -> Result<Value> {
    client.send("/api/v2/agents/state", Some(request)).await
}

/// Permanently removes archived agents matching the request criteria.
pub async fn delete_archived_agents(
    client: &DlpClient,
    request: &DeleteArchivedAgentsRequest,
) -> Result<Value> {
    client
        .insert("/api/v1/admin/agents/archived/delete", Some(request))
        .await
}

/// Assigns labels to agents in bulk.
pub async fn assign_labels(
    client: &DlpClient,
    agent_ids: &[String],
    label_ids: &[String],
) -> Result<Value> {
    let body = AgentLabelsBody {
        agent_ids,
        label_ids,
    };
    client
        .insert("/api/v1/admin/agents/labels/add", Some(&body))
        .await
}

/// Removes labels from agents in bulk.
pub async fn unassign_labels(
    client: &DlpClient,
    agent_ids: &[String],
    label_ids: &[String],
) -> Result<Value> {
    let body = AgentLabelsBody {
        agent_ids,
        label_ids,
    };
    client
        .insert("/api/v1/admin/agents/labels/remove", Some(&body))
        .await
}

/// Lists all agent configuration profiles.
pub async fn list_agent_configs(client: &DlpClient) -> Result<Value> {
    client.get("/api/v1/agent-configs", None).await
}

/// Deletes an agent configuration profile by ID.
pub async fn delete_agent_config(client: &DlpClient, config_id: &str) -> Result<Value> {
    client
        .delete(&format!("/api/v1/agent-configs/{config_id}"))
        .await
}
