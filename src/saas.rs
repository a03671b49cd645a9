//! SaaS application state control for the FortiDLP API.
//!
//! One endpoint: POST `/api/v2/saas-applications/state`, switching
//! sanctioned/unsanctioned state for either all applications or a
//! filtered subset. As with incident status updates, `all` and `filter`
//! are mutually exclusive on the wire.

use serde::Serialize;
use serde_json::Value;

use crate::client::DlpClient;
use crate::error::Result;

/// Applications targeted by a state change.
#[derive(Debug, Clone)]
pub enum ApplicationSelection {
    /// Apply to every SaaS application.
    All,
    /// Apply to applications matching the given filter expressions.
    Matching(Vec<Value>),
}

#[derive(Debug, Clone, Serialize)]
struct ChangeStateBody<'a> {
    state: &'a str,
    reason: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    all: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<&'a [Value]>,
}

/// Changes the state of the selected SaaS applications. A reason is
/// mandatory and lands in the audit log.
///
/// # Errors
///
/// - `DlpError::Api` — non-success status.
/// - `DlpError::NotAuthenticated` — no session.
/// - `DlpError::Transport` — transport-level failure.
pub async fn set_application_state(
    client: &DlpClient,
    state: &str,
    reason: &str,
    selection: &ApplicationSelection,
) -> Result<Value> {
    let body = match selection {
        ApplicationSelection::All => ChangeStateBody {
            state,
            reason,
            all: Some(true),
            filter: None,
        },
        ApplicationSelection::Matching(filter) => ChangeStateBody {
            state,
            reason,
            all: None,
            filter: Some(filter),
        },
    };
    client
        .send("/api/v2/saas-applications/state", Some(&body))
        .await
}
