//! # triage-service
//!
//! A rule-based triage backend.
//!
//! `POST /api/triage/assess` waits a configurable processing delay, runs the
//! symptom text through a [`TomlUrgencyEngine`](triage_rules::TomlUrgencyEngine)
//! and attaches the nearest suitable facilities from a fixed directory.
//! `GET /api/triage/resources` and `GET /api/triage/health` round out the
//! surface. CORS is permissive.
//!
//! ```rust,ignore
//! triage_service::serve(ServiceConfig::default()).await?;
//! ```

pub mod config;
pub mod error;
pub mod resources;
pub mod router;
pub mod server;

pub use config::ServiceConfig;
pub use router::{router, AppState};
pub use server::{serve, serve_on};
