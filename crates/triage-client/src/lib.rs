//! # triage-client
//!
//! Submits symptom text to a remote triage endpoint.
//!
//! [`TriageClient::submit_triage`] never fails outward: transport errors,
//! non-success statuses and bodies that do not pass verification are all
//! replaced by [`fallback::fallback_assessment`]. The `try_*` methods,
//! `health` and `resources` surface errors for callers that want them.
//!
//! ```rust,ignore
//! use triage_client::{ClientConfig, TriageClient};
//!
//! let client = TriageClient::new(ClientConfig::default())?;
//! let result = client.submit_triage("chest pain", "San Francisco").await;
//! ```

pub mod client;
pub mod config;
pub mod fallback;

pub use client::TriageClient;
pub use config::ClientConfig;
pub use fallback::fallback_assessment;
