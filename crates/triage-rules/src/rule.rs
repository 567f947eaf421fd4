//! Urgency rule types and configuration schema.
//!
//! A `RulesConfig` is deserialized from TOML and holds an ordered list of
//! `UrgencyRule`s plus the outcome used when none matches. Rules are
//! evaluated in declaration order; the first matching rule wins.

use serde::{Deserialize, Serialize};

use triage_contracts::{assessment::UrgencyAssessment, urgency::Urgency};

/// A single keyword rule loaded from TOML.
///
/// A rule matches when any of its `keywords` occurs as a substring of the
/// lowercased symptom text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrgencyRule {
    /// Stable identifier used in logs and error messages.
    pub id: String,

    /// Human-readable explanation of what this rule catches.
    pub description: String,

    /// The urgency this rule assigns.
    pub urgency: Urgency,

    /// Lowercase substrings. At least one is required.
    pub keywords: Vec<String>,

    pub summary: String,

    pub recommendations: Vec<String>,

    #[serde(default)]
    pub reasoning: String,
}

impl UrgencyRule {
    /// Return the first keyword found in `lowered`, if any.
    ///
    /// `lowered` must already be lowercase; keywords are compared as written.
    pub fn first_match<'r>(&'r self, lowered: &str) -> Option<&'r str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .find(|kw| lowered.contains(kw))
    }

    /// The assessment this rule produces when it matches.
    pub fn assessment(&self) -> UrgencyAssessment {
        UrgencyAssessment {
            urgency_level: self.urgency,
            summary: self.summary.clone(),
            recommendations: self.recommendations.clone(),
            reasoning: self.reasoning.clone(),
        }
    }
}

/// The outcome applied when no rule matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultOutcome {
    pub urgency: Urgency,
    pub summary: String,
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub reasoning: String,
}

impl DefaultOutcome {
    pub fn assessment(&self) -> UrgencyAssessment {
        UrgencyAssessment {
            urgency_level: self.urgency,
            summary: self.summary.clone(),
            recommendations: self.recommendations.clone(),
            reasoning: self.reasoning.clone(),
        }
    }
}

/// The top-level structure deserialized from a TOML rules file.
///
/// Example:
/// ```toml
/// [[rules]]
/// id = "high-urgency"
/// description = "Potentially life-threatening presentations"
/// urgency = "high"
/// keywords = ["chest pain", "stroke"]
/// summary = "Seek emergency care."
/// recommendations = ["Call 911"]
///
/// [default]
/// urgency = "low"
/// summary = "Likely mild."
/// recommendations = ["Rest"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Ordered list of rules. First match wins.
    #[serde(default)]
    pub rules: Vec<UrgencyRule>,
    pub default: DefaultOutcome,
}
