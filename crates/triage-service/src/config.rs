//! Service configuration.

use std::{path::PathBuf, sync::Arc, time::Duration};

use serde::{Deserialize, Serialize};

use triage_contracts::error::TriageOutcome;
use triage_core::traits::UrgencyEngine;
use triage_rules::TomlUrgencyEngine;

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub const DEFAULT_PROCESSING_DELAY_MS: u64 = 2000;

/// Deserializes from the `[service]` table of `triage.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub bind: String,
    /// Simulated processing time before each assessment is answered.
    pub processing_delay_ms: u64,
    /// Rules file to load instead of the embedded rule set.
    pub rules_path: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            processing_delay_ms: DEFAULT_PROCESSING_DELAY_MS,
            rules_path: None,
        }
    }
}

impl ServiceConfig {
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    /// Build the urgency engine named by `rules_path`, or the embedded one.
    pub fn load_engine(&self) -> TriageOutcome<Arc<dyn UrgencyEngine>> {
        let engine = match &self.rules_path {
            Some(path) => TomlUrgencyEngine::from_file(path)?,
            None => TomlUrgencyEngine::builtin()?,
        };
        Ok(Arc::new(engine))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_embedded_rules() {
        let config = ServiceConfig::default();
        assert_eq!(config.processing_delay(), Duration::from_secs(2));
        assert!(config.load_engine().is_ok());
    }

    #[test]
    fn missing_rules_file_is_a_config_error() {
        let config = ServiceConfig {
            rules_path: Some(PathBuf::from("/nonexistent/urgency.toml")),
            ..ServiceConfig::default()
        };
        let err = config.load_engine().err().unwrap();
        assert!(err.to_string().contains("configuration error"));
    }
}
