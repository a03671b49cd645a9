//! Typed error hierarchy for the fortidlp crate.
//!
//! Every failure category gets its own variant so callers can match on
//! the boundary that failed rather than parsing message strings:
//!
//! - `NotAuthenticated` — a dispatch primitive was called before any
//!   successful `authenticate`. Explicit and recoverable.
//! - `Auth` — every probe endpoint was exhausted during authentication;
//!   carries the classification string of the last probe.
//! - `Api` — the API returned a non-2xx status on an ordinary request.
//! - `Transport` — DNS/TCP/TLS/timeout failures below the HTTP layer.
//!   Kept separate from `Api` so callers that consider connectivity
//!   loss unrecoverable can abort on exactly this variant.
//! - `InvalidToken` — the supplied bearer token cannot be encoded as an
//!   HTTP header value.

use reqwest::StatusCode;

/// Unified error type for all fortidlp library operations.
#[derive(Debug, thiserror::Error)]
pub enum DlpError {
    /// A dispatch primitive was invoked with no valid session.
    ///
    /// Returned by `get`/`send`/`insert`/`delete`/`download` when
    /// `DlpClient::authenticate` has not yet succeeded.
    #[error("not authenticated: call authenticate() before issuing requests")]
    NotAuthenticated,

    /// Authentication failed: every probe endpoint returned a classified
    /// failure status. The payload is the classification of the last
    /// probe response ("Unauthorized", "Forbidden", "Not Found", or
    /// "Internal Server Error").
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The FortiDLP API returned a non-success HTTP status code.
    ///
    /// `reason` is the classification string for the four well-known
    /// statuses, or the raw response body for anything else, so
    /// server-side diagnostics are never discarded.
    #[error("API error {status}: {reason}")]
    Api {
        /// The HTTP status code returned by the API.
        status: StatusCode,
        /// Classification string or raw response body.
        reason: String,
    },

    /// A network-level failure occurred (DNS resolution, TCP connection,
    /// TLS handshake, request timeout). No HTTP status code is available
    /// because the request did not complete.
    ///
    /// Whether to treat this variant as fatal is left to the caller.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The bearer token contains bytes that are not valid in an HTTP
    /// header value.
    #[error("invalid bearer token: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, DlpError>;

/// Maps the four well-known FortiDLP failure statuses to their short
/// human-readable classification strings. Any other status returns `None`
/// and is handled by the caller (success for the auth probe, raw-body
/// error for dispatch).
pub(crate) fn classify_status(status: StatusCode) -> Option<&'static str> {
    match status {
        StatusCode::UNAUTHORIZED => Some("Unauthorized"),
        StatusCode::FORBIDDEN => Some("Forbidden"),
        StatusCode::NOT_FOUND => Some("Not Found"),
        StatusCode::INTERNAL_SERVER_ERROR => Some("Internal Server Error"),
        _ => None,
    }
}

/// Builds the `Api` variant for a non-2xx response, preferring the
/// classification string and falling back to the raw body text.
pub(crate) fn api_error(status: StatusCode, body: String) -> DlpError {
    let reason = match classify_status(status) {
        Some(label) => label.to_string(),
        None => body,
    };
    DlpError::Api { status, reason }
}
