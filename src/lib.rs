//! Async Rust client library for the FortiDLP cloud security platform
//! REST API.
//!
//! Exposes the platform's endpoint catalog as typed calls grouped by
//! resource (users, agents, policies, incidents, cases, labels, audit
//! logs, SaaS application states, operators), all funnelled through a
//! single authenticated dispatch layer.
//!
//! # Modules
//!
//! - [`auth`] — probe-based bearer token validation.
//! - [`client`] — connection state and the five dispatch primitives.
//! - [`error`] — typed error hierarchy (`DlpError`).
//! - [`agents`], [`audit`], [`cases`], [`incidents`], [`labels`],
//!   [`operators`], [`policies`], [`saas`], [`users`] — the per-resource
//!   endpoint catalog.
//!
//! # Quick Start
//!
//! ```ignore
//! use fortidlp::DlpClient;
//!
//! let mut client = DlpClient::new();
//! client.authenticate("tenant.example.com", "api-token").await?;
//!
//! let request = fortidlp::labels::CreateLabelRequest::new("PII");
//! let label = fortidlp::labels::create_label(&client, &request).await?;
//! ```
//!
//! Authentication probes two known-present read endpoints rather than a
//! dedicated login route; see [`auth::AuthValidator`] for the rules. The
//! client performs no retries and no session refresh — a rejected token
//! surfaces as an error on the call that hit it.

#![warn(missing_docs)]

pub mod agents;
pub mod audit;
pub mod auth;
pub mod cases;
pub mod client;
pub mod error;
pub mod incidents;
pub mod labels;
pub mod operators;
pub mod policies;
pub mod saas;
pub mod users;

pub use client::{DlpClient, Session, AUTHENTICATION_SUCCEEDED};
pub use error::{DlpError, Result};
