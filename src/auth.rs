//! Probe-based bearer token validation for the FortiDLP API.
//!
//! FortiDLP has no token introspection endpoint, so a (host, token) pair
//! is validated by issuing GET requests against a short ordered list of
//! read endpoints that exist on every tenant. The probe loop classifies
//! each response:
//!
//! - 401/403/404/500 map to short classification strings and the loop
//!   moves on to the next probe. A classified failure never short-circuits
//!   the list; only success or exhaustion ends the loop. This mirrors the
//!   upstream client exactly — a 403 on the first probe (e.g. a token
//!   scoped away from user search) can still authenticate via the second.
//! - Any other status counts as success and returns immediately with the
//!   probe's body and response headers.
//!
//! The probe list is data, not control flow: construct an
//! [`AuthValidator`] with a custom list to extend it without touching the
//! dispatch layer.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;
use tracing::debug;

use crate::error::{classify_status, DlpError, Result};

/// Read endpoints that exist on every FortiDLP tenant, probed in order
/// during authentication.
pub const DEFAULT_PROBE_ENDPOINTS: &[&str] = &["/api/v2/users/search", "/api/v2/dashboards"];

/// Outcome of a successful probe.
#[derive(Debug)]
pub struct AuthResult {
    /// Body of the first successful probe response, parsed as JSON when
    /// possible and carried as a raw string otherwise.
    pub body: Value,
    /// Response headers of the successful probe.
    pub response_headers: HeaderMap,
}

/// Validates a (host, bearer token) pair by probing known-present
/// endpoints.
#[derive(Debug, Clone)]
pub struct AuthValidator {
    probes: Vec<String>,
}

impl Default for AuthValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthValidator {
    /// Validator with the default FortiDLP probe list.
    pub fn new() -> Self {
        AuthValidator {
            probes: DEFAULT_PROBE_ENDPOINTS
                .iter()
                .map(|p| (*p).to_string())
                .collect(),
        }
    }

    /// Validator with a caller-supplied ordered probe list. Paths are
    /// relative to the tenant base URL and should carry a leading slash.
    pub fn with_probes(probes: Vec<String>) -> Self {
        AuthValidator { probes }
    }

    /// The configured probe paths, in probe order.
    pub fn probes(&self) -> &[String] {
        &self.probes
    }

    /// Probes the tenant until one endpoint accepts the token.
    ///
    /// Returns the successful probe's body and headers, or
    /// `DlpError::Auth` carrying the last classification string once the
    /// list is exhausted. Transport failures propagate as
    /// `DlpError::Transport` from whichever probe hit them.
    pub async fn validate(
        &self,
        http: &reqwest::Client,
        base_url: &str,
        headers: &HeaderMap,
    ) -> Result<AuthResult> {
        let mut last_classification = String::from("no probe endpoints configured");

        for probe in &self.probes {
            let url = format!("{base_url}{probe}");
            let response = http.get(&url).headers(headers.clone()).send().await?;
            let status = response.status();

            match classify_status(status) {
                Some(label) => {
                    // Keep probing: a classified failure on one endpoint
                    // does not rule out the next.
                    debug!(%url, %status, classification = label, "probe rejected");
                    last_classification = label.to_string();
                }
                None => {
                    debug!(%url, %status, "probe accepted");
                    let response_headers = response.headers().clone();
                    let text = response.text().await?;
                    let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
                    return Ok(AuthResult {
                        body,
                        response_headers,
                    });
                }
            }
        }

        Err(DlpError::Auth(last_classification))
    }
}

/// Builds the header map carried by every authenticated request:
/// exactly one `Authorization: Bearer <token>` entry.
pub(crate) fn bearer_headers(token: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}"))?,
    );
    Ok(headers)
}
