//! Policy group and policy data management for the FortiDLP API.
//!
//! Policy groups bundle policies and target them at labelled agent
//! populations:
//!
//! - [`create_policy_group`] / [`list_policy_groups`] /
//!   [`delete_policy_group`] — CRUD on `/api/v1/policies/groups`.
//! - [`export_policy_groups`] — POST `/api/v1/policies/export`, returning
//!   an opaque export archive as raw bytes.
//!
//! Policy data objects are the reusable assets referenced by policies:
//!
//! - [`list_policy_data`] / [`get_policy_data`] / [`delete_policy_data`]
//!   on `/api/v1/policies/data`.

use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;

use crate::client::DlpClient;
use crate::error::Result;

/// Body for policy group creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePolicyGroupRequest {
    /// Group description.
    pub description: String,
    /// Labels whose agents are excluded from the group.
    pub exclude_labels: Vec<String>,
    /// Labels whose agents are included in the group.
    pub include_labels: Vec<String>,
    /// Label match criteria.
    #[serde(rename = "match")]
    pub match_criteria: String,
    /// Group name.
    pub name: String,
}

/// Body for policy group export.
#[derive(Debug, Clone, Serialize)]
pub struct ExportPolicyGroupsRequest {
    /// Groups to include in the archive.
    pub group_ids: Vec<String>,
    /// Whether referenced data objects are bundled.
    pub include_data_objects: bool,
    /// Whether referenced labels are bundled.
    pub include_labels: bool,
}

/// Creates a policy group.
///
/// # Errors
///
/// - `DlpError::Api` — non-success status.
/// - `DlpError::NotAuthenticated` — no session.
/// - `DlpError::Transport` — transport-level failure.
pub async fn create_policy_group(
    client: &DlpClient,
    request: &CreatePolicyGroupRequest,
) -> Result<Value> {
    client.send("/api/v1/policies/groups", Some(request)).await
}

/// Lists all policy groups.
pub async fn list_policy_groups(client: &DlpClient) -> Result<Value> {
    client.get("/api/v1/policies/groups", None).await
}

/// Deletes a policy group by ID.
pub async fn delete_policy_group(client: &DlpClient, group_id: &str) -> Result<Value> {
    client
        .delete(&format!("/api/v1/policies/groups/{group_id}"))
        .await
}

/// Exports policy groups as an opaque archive.
///
/// The returned bytes are the archive content as served; no decoding is
/// attempted client-side.
pub async fn export_policy_groups(
    client: &DlpClient,
    request: &ExportPolicyGroupsRequest,
) -> Result<Bytes> {
    client
        .download("/api/v1/policies/export", Some(request))
        .await
}

/// Lists all policy data objects.
pub async fn list_policy_data(client: &DlpClient) -> Result<Value> {
    client.get("/api/v1/policies/data", None).await
}

/// Retrieves a single policy data object by ID.
pub async fn get_policy_data(client: &DlpClient, policy_id: &str) -> Result<Value> {
    client
        .get(&format!("/api/v1/policies/data/{policy_id}"), None)
        .await
}

/// Deletes a policy data object by ID.
pub async fn delete_policy_data(client: &DlpClient, policy_id: &str) -> Result<Value> {
    client
        .delete(&format!("/api/v1/policies/data/{policy_id}"))
        .await
}
