//! User directory access for the FortiDLP API.
//!
//! - [`list_users`] — GET `/api/v1/users`.
//! - [`create_user`] — POST `/api/v1/admin/users` with a full directory
//!   profile.
//!
//! User records mirror what a directory sync would produce, so almost
//! every field is optional and absent fields are omitted from the body.

use serde::Serialize;
use serde_json::Value;

use crate::client::DlpClient;
use crate::error::Result;

/// A directory label attached to a user (e.g. department membership).
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryLabel {
    /// Label category, typically `"DIRECTORY"`.
    pub category: String,
    /// Label name, e.g. `"Department | Accounting"`.
    pub name: String,
}

/// Provenance of a synced user record.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncInfo {
    /// Identifier of the sync run that produced this record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_invocation_id: Option<String>,
    /// Source the record was synced from, e.g. an `ldap://` URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_source: Option<String>,
}

impl SyncInfo {
    fn is_empty(&self) -> bool {
        self.sync_invocation_id.is_none() && self.sync_source.is_none()
    }
}

/// Body for user creation. Field names match the FortiDLP admin API.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateUserRequest {
    /// Home address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_home: Option<String>,
    /// Office address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_office: Option<String>,
    /// Department name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Directory labels to attach.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub directory_labels: Vec<DirectoryLabel>,
    /// Primary email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Base64 profile image content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_content: Option<String>,
    /// Platform-assigned user UUID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub juid: Option<String>,
    /// Manager display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
    /// Manager's unique ID hash.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_unique_id: Option<String>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Mobile phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number_mobile: Option<String>,
    /// Office phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number_office: Option<String>,
    /// Sync provenance; omitted when both fields are unset.
    #[serde(skip_serializing_if = "SyncInfo::is_empty")]
    pub sync_info: SyncInfo,
    /// Job title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Source-specific unique data, e.g. a Windows SID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_data: Option<String>,
    /// Stable unique ID hash.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
    /// URIs identifying the user (mail, SID, ...).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_uri: Vec<String>,
}

/// Lists all users.
pub async fn list_users(client: &DlpClient) -> Result<Value> {
    client.get("/api/v1/users", None).await
}

/// Creates a user via the admin endpoint.
///
/// # Errors
///
/// - `DlpError::Api` — non-success status.
/// - `DlpError::NotAuthenticated` — no session.
/// - `DlpError::Transport` — transport-level failure.
pub async fn create_user(client: &DlpClient, request: &CreateUserRequest) -> Result<Value> {
    client.send("/api/v1/admin/users", Some(request)).await
}
