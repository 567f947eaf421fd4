//! Client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_ASSESS_PATH: &str = "/api/triage/assess";

/// Where the triage endpoint lives and how long to wait for it.
///
/// Deserializes from the `[client]` table of `triage.toml`; every field is
/// optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    /// Path of the assess route. Sibling routes (`health`, `resources`)
    /// are resolved next to it.
    pub assess_path: String,
    /// Whole-request timeout. `None` leaves it to the transport.
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            assess_path: DEFAULT_ASSESS_PATH.to_string(),
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Full URL of the assess route.
    pub fn assess_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.assess_path)
    }

    /// Full URL of a route that sits beside the assess route.
    ///
    /// `sibling_url("health")` with the default path gives
    /// `http://127.0.0.1:5000/api/triage/health`.
    pub fn sibling_url(&self, name: &str) -> String {
        let prefix = self
            .assess_path
            .trim_end_matches('/')
            .rsplit_once('/')
            .map(|(parent, _)| parent)
            .unwrap_or("");
        format!("{}{}/{}", self.base_url.trim_end_matches('/'), prefix, name)
    }
}
