//! Operator (console administrator) management for the FortiDLP API.
//!
//! - [`list_operators`] — GET `/api/v1/operators`.
//! - [`create_operator`] — POST `/api/v1/operators`.
//! - [`delete_operator`] — DELETE `/api/v1/operators/{id}`.

use serde::Serialize;
use serde_json::Value;

use crate::client::DlpClient;
use crate::error::Result;

/// The `operator` object nested inside a creation request.
#[derive(Debug, Clone, Serialize)]
pub struct Operator {
    /// Operator's company.
    pub company: String,
    /// Display name shown in the console.
    pub display_name: String,
    /// Contact email; also receives the passphrase reset link.
    pub email: String,
    /// Login name.
    pub name: String,
    /// Console roles assigned to the operator.
    pub roles: Vec<String>,
}

/// Body for operator creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOperatorRequest {
    /// The operator being created.
    pub operator: Operator,
    /// Initial passphrase.
    pub passphrase: String,
    /// Validity of the passphrase reset link, in days.
    pub passphrase_reset_link_expiry_duration: u32,
    /// Whether the operator must reset the passphrase on first login.
    pub passphrase_reset_on_login: bool,
}

/// Lists all operators.
pub async fn list_operators(client: &DlpClient) -> Result<Value> {
    client.get("/api/v1/operators", None).await
}

/// Creates an operator.
///
/// # Errors
///
/// - `DlpError::Api` — non-success status (e.g. a duplicate login name).
/// - `DlpError::NotAuthenticated` — no session.
/// - `DlpError::Transport` — transport-level failure.
pub async fn create_operator(client: &DlpClient, request: &CreateOperatorRequest) -> Result<Value> {
    client.send("/api/v1/operators", Some(request)).await
}

/// Deletes an operator by ID.
pub async fn delete_operator(client: &DlpClient, operator_id: &str) -> Result<Value> {
    client
        .delete(&format!("/api/v1/operators/{operator_id}"))
        .await
}
