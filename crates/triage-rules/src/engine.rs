//! TOML-driven urgency engine implementation.
//!
//! `TomlUrgencyEngine` loads a `RulesConfig` from a TOML string or file and
//! implements the `UrgencyEngine` trait from triage-core.
//!
//! Evaluation algorithm:
//!
//! 1. Lowercase the symptom text once.
//! 2. Iterate rules in declaration order.
//! 3. The first rule with a keyword contained in the text decides the outcome.
//! 4. If no rule matched, return the configured default outcome.

use std::path::Path;

use tracing::debug;

use triage_contracts::{
    assessment::UrgencyAssessment,
    error::{TriageError, TriageOutcome},
};
use triage_core::traits::UrgencyEngine;

use crate::rule::RulesConfig;

/// The rule set compiled into the binary.
pub const BUILTIN_RULES: &str = include_str!("../rules/urgency.toml");

/// An `UrgencyEngine` implementation that reads rules from a TOML document.
///
/// ```rust,ignore
/// use triage_rules::TomlUrgencyEngine;
///
/// let engine = TomlUrgencyEngine::from_file(Path::new("rules/urgency.toml"))?;
/// ```
#[derive(Debug)]
pub struct TomlUrgencyEngine {
    config: RulesConfig,
}

impl TomlUrgencyEngine {
    /// Parse `s` as TOML and build a `TomlUrgencyEngine`.
    ///
    /// Returns `TriageError::ConfigError` if the TOML is malformed, does not
    /// match `RulesConfig`, or declares a rule without keywords.
    pub fn from_toml_str(s: &str) -> TriageOutcome<Self> {
        let config: RulesConfig = toml::from_str(s).map_err(|e| TriageError::ConfigError {
            reason: format!("failed to parse rules TOML: {}", e),
        })?;
        Self::from_config(config)
    }

    /// Read the file at `path` and parse it as a TOML rule set.
    pub fn from_file(path: &Path) -> TriageOutcome<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| TriageError::ConfigError {
            reason: format!("failed to read rules file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// The embedded rule set shipped with the service.
    pub fn builtin() -> TriageOutcome<Self> {
        Self::from_toml_str(BUILTIN_RULES)
    }

    /// Validate and wrap an already-deserialized config.
    pub fn from_config(mut config: RulesConfig) -> TriageOutcome<Self> {
        for rule in &mut config.rules {
            rule.keywords.retain(|kw| !kw.trim().is_empty());
            if rule.keywords.is_empty() {
                return Err(TriageError::ConfigError {
                    reason: format!("rule '{}' has no keywords", rule.id),
                });
            }
            for kw in &mut rule.keywords {
                *kw = kw.to_lowercase();
            }
        }
        debug!(rules = config.rules.len(), "loaded urgency rules");
        Ok(Self { config })
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }
}

impl UrgencyEngine for TomlUrgencyEngine {
    /// Evaluate `symptoms` against the loaded rule set.
    ///
    /// Matching is case-insensitive substring search. The first rule with a
    /// hit wins even when a later rule also matches.
    fn evaluate(&self, symptoms: &str) -> TriageOutcome<UrgencyAssessment> {
        let lowered = symptoms.to_lowercase();

        for rule in &self.config.rules {
            if let Some(keyword) = rule.first_match(&lowered) {
                debug!(
                    rule_id = %rule.id,
                    keyword,
                    urgency = %rule.urgency,
                    "urgency rule matched"
                );
                return Ok(rule.assessment());
            }
        }

        debug!(urgency = %self.config.default.urgency, "no urgency rule matched; using default");
        Ok(self.config.default.assessment())
    }
}
