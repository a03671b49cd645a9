//! Connection state and request dispatch for the FortiDLP API.
//!
//! `DlpClient` holds the connection state as an explicit instance:
//! callers construct one client, authenticate it, and hand out shared
//! references. Mutating operations (`authenticate`, `set_insecure`,
//! `set_debug`) take `&mut self` while dispatch takes `&self`, so a
//! session can never be replaced while a request is borrowing it.
//!
//! All five dispatch primitives funnel through one request/classify
//! path:
//! - 2xx responses yield the body parsed as JSON (or the raw text as a
//!   JSON string when the body is not JSON).
//! - 401/403/404/500 yield `DlpError::Api` with the short classification
//!   string; other non-2xx statuses carry the raw body instead.
//! - No retries, no redirect handling beyond reqwest defaults, no rate
//!   limiting.

use std::sync::Once;
use std::time::Duration;

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::auth::{bearer_headers, AuthResult, AuthValidator};
use crate::error::{api_error, DlpError, Result};

/// Sentinel logged when authentication succeeds. The typed equivalent
/// is `authenticate` returning `Ok`.
pub const AUTHENTICATION_SUCCEEDED: &str = "AUTHENTICATION_SUCCEEDED";

/// Connect timeout for API calls. Covers TCP + TLS handshake only.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Overall request timeout. Set high enough to accommodate policy
/// export downloads, which can be multi-MB archives.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Printed at most once per process when TLS verification is disabled.
static INSECURE_WARNING: Once = Once::new();

/// Builds the `reqwest::Client` backing a session.
///
/// `tls_verify = false` disables certificate validation for every
/// request issued through the returned client.
fn build_http_client(tls_verify: bool) -> Result<Client> {
    let client = Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(REQUEST_TIMEOUT)
        .danger_accept_invalid_certs(!tls_verify)
        .build()?;
    Ok(client)
}

/// Normalizes a tenant host into a base URL.
///
/// A bare hostname (or host:port) gets an `https://` scheme. An explicit
/// scheme is kept as-is so tests can point the client at a plain-HTTP
/// mock server. Trailing slashes are stripped because every catalog path
/// carries its own leading slash.
fn base_url(host: &str) -> String {
    let trimmed = host.trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Validated connection state. Either fully populated or absent — there
/// is no partially authenticated session.
#[derive(Debug)]
pub struct Session {
    base_url: String,
    headers: HeaderMap,
    http: Client,
}

impl Session {
    /// The normalized tenant base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers merged into every request; always contains the
    /// `Authorization: Bearer <token>` entry.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

/// FortiDLP API client.
///
/// ```ignore
/// let mut client = DlpClient::new();
/// client.authenticate("tenant.example.com", "api-token").await?;
/// let labels = fortidlp::labels::search_labels(&client, &Default::default(), 100, "asc", None).await?;
/// ```
#[derive(Debug)]
pub struct DlpClient {
    validator: AuthValidator,
    session: Option<Session>,
    tls_verify: bool,
    debug: bool,
}

impl Default for DlpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DlpClient {
    /// Unauthenticated client with TLS verification on and debug off.
    pub fn new() -> Self {
        DlpClient {
            validator: AuthValidator::new(),
            session: None,
            tls_verify: true,
            debug: false,
        }
    }

    /// Client with a custom probe validator, for tenants where the
    /// default probe endpoints are unavailable.
    pub fn with_validator(validator: AuthValidator) -> Self {
        DlpClient {
            validator,
            ..Self::new()
        }
    }

    /// Validates the (host, token) pair and installs a session.
    ///
    /// On success the previous session (if any) is replaced wholesale.
    /// On failure the existing session is left untouched and the error
    /// describes the classified cause.
    ///
    /// Returns the successful probe's body and response headers, which
    /// callers may inspect or ignore.
    ///
    /// # Errors
    ///
    /// - `DlpError::Auth` — every probe endpoint rejected the token.
    /// - `DlpError::Transport` — the host could not be reached.
    /// - `DlpError::InvalidToken` — the token is not header-safe.
    pub async fn authenticate(&mut self, host: &str, token: &str) -> Result<AuthResult> {
        let base_url = base_url(host);
        let headers = bearer_headers(token)?;
        let http = build_http_client(self.tls_verify)?;

        let result = self.validator.validate(&http, &base_url, &headers).await?;

        info!(host = %base_url, "{AUTHENTICATION_SUCCEEDED}");
        self.session = Some(Session {
            base_url,
            headers,
            http,
        });
        Ok(result)
    }

    /// Disables TLS certificate verification for the current session's
    /// future requests and for all future sessions. Irreversible within
    /// the process; emits a one-time advisory warning.
    pub fn set_insecure(&mut self) {
        self.tls_verify = false;
        INSECURE_WARNING.call_once(|| {
            warn!("TLS certificate verification disabled; enable it unless you trust the network path");
        });

        // Rebuild the live session's HTTP client so requests already in
        // flight keep their connection but new ones skip verification.
        if let Some(session) = &mut self.session {
            match build_http_client(false) {
                Ok(http) => session.http = http,
                Err(err) => warn!(error = %err, "failed to rebuild HTTP client; session keeps verifying certificates"),
            }
        }
    }

    /// Enables request/response debug logging on the dispatch layer.
    pub fn set_debug(&mut self) {
        self.debug = true;
    }

    /// Whether TLS certificates are verified.
    pub fn tls_verify(&self) -> bool {
        self.tls_verify
    }

    /// Whether dispatch debug logging is enabled.
    pub fn debug_enabled(&self) -> bool {
        self.debug
    }

    /// The current session, if authentication has succeeded.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// True once `authenticate` has succeeded.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    fn require_session(&self) -> Result<&Session> {
        self.session.as_ref().ok_or(DlpError::NotAuthenticated)
    }

    /// Shared request path for all five primitives. Builds the URL from
    /// the session base, merges session headers, attaches optional query
    /// pairs and JSON body, and sends.
    async fn dispatch<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, &str)]>,
        body: Option<&B>,
    ) -> Result<reqwest::Response> {
        let session = self.require_session()?;
        let url = format!("{}{}", session.base_url, path);

        if self.debug {
            debug!(%method, %url, "dispatching request");
        }

        let mut request = session
            .http
            .request(method, &url)
            .headers(session.headers.clone());
        if let Some(pairs) = query {
            request = request.query(pairs);
        }
        if let Some(payload) = body {
            request = request.json(payload);
        }

        Ok(request.send().await?)
    }

    /// Classifies a response into the shared success/failure shape and
    /// decodes the body.
    async fn into_json(&self, response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let text = response.text().await?;

        if self.debug {
            debug!(%status, body = %text, "response received");
        }

        if status.is_success() {
            Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
        } else {
            Err(api_error(status, text))
        }
    }

    /// GET with optional query pairs.
    pub async fn get(&self, path: &str, query: Option<&[(&str, &str)]>) -> Result<Value> {
        let response = self.dispatch::<()>(Method::GET, path, query, None).await?;
        self.into_json(response).await
    }

    /// POST with a JSON body (create/replace-style mutation).
    pub async fn send<B: Serialize + ?Sized>(&self, path: &str, body: Option<&B>) -> Result<Value> {
        let response = self.dispatch(Method::POST, path, None, body).await?;
        self.into_json(response).await
    }

    /// POST with a JSON body, targeting the bulk-mutation endpoints
    /// (label assignment, archived-agent deletion).
    ///
    /// Wire-identical to [`send`](Self::send) today; kept as a distinct
    /// operation because the API groups these endpoints separately and
    /// may diverge on verb.
    pub async fn insert<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<Value> {
        let response = self.dispatch(Method::POST, path, None, body).await?;
        self.into_json(response).await
    }

    /// DELETE with no body.
    pub async fn delete(&self, path: &str) -> Result<Value> {
        let response = self.dispatch::<()>(Method::DELETE, path, None, None).await?;
        self.into_json(response).await
    }

    /// POST expected to return opaque binary content (e.g. a policy
    /// export archive). Success yields the raw bytes, not parsed JSON;
    /// failures classify exactly like the JSON primitives.
    pub async fn download<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<Bytes> {
        let response = self.dispatch(Method::POST, path, None, body).await?;
        let status = response.status();

        if status.is_success() {
            if self.debug {
                debug!(%status, "binary response received");
            }
            Ok(response.bytes().await?)
        } else {
            let text = response.text().await?;
            Err(api_error(status, text))
        }
    }
}
