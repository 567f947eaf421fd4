//! `triage.toml` loading.
//!
//! ```toml
//! [client]
//! base_url = "http://127.0.0.1:5000"
//!
//! [service]
//! bind = "0.0.0.0:5000"
//! processing_delay_ms = 500
//!
//! [analysis]
//! delay_ms = 0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use triage_client::ClientConfig;
use triage_contracts::error::{TriageError, TriageOutcome};
use triage_service::ServiceConfig;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "triage.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub delay_ms: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            delay_ms: triage_core::analysis::DEFAULT_ANALYSIS_DELAY.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub client: ClientConfig,
    pub service: ServiceConfig,
    pub analysis: AnalysisConfig,
}

impl CliConfig {
    pub fn from_toml_str(s: &str) -> TriageOutcome<Self> {
        toml::from_str(s).map_err(|e| TriageError::ConfigError {
            reason: format!("failed to parse config TOML: {}", e),
        })
    }

    /// Load `explicit` if given (it must exist), otherwise `triage.toml`
    /// if present, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> TriageOutcome<Self> {
        let path = match explicit {
            Some(p) => p,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Path::new(DEFAULT_CONFIG_FILE),
            None => return Ok(Self::default()),
        };
        let contents = std::fs::read_to_string(path).map_err(|e| TriageError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }
}
