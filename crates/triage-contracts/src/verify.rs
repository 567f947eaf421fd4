//! Response verification schema and report types.
//!
//! Before a triage response is handed to a caller, the verifier runs it
//! against an `OutputSchema`. Only a passing `VerificationReport` lets the
//! body through; anything else routes into the fallback path.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Everything a response body is checked against.
///
/// Combines a JSON Schema document with business rules that JSON Schema
/// cannot express on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSchema {
    /// Unique identifier for this schema (e.g. "triage-response-v1").
    pub schema_id: String,
    /// A JSON Schema document used for structural validation. `Null` skips
    /// the structural phase.
    pub json_schema: Value,
    /// Additional domain rules evaluated after structural validation.
    pub rules: Vec<VerificationRule>,
}

/// A single verification rule applied to a response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationRule {
    /// Unique identifier for this rule, referenced in failure reports.
    pub rule_id: String,
    /// Human-readable description for operator logs.
    pub description: String,
    /// The verification logic to apply.
    pub rule_type: VerificationRuleType,
}

/// The kinds of verification checks supported out of the box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum VerificationRuleType {
    /// The field at `field_path` must be present and non-null.
    RequiredField {
        /// Dotted path, e.g. "nearbyResources".
        field_path: String,
    },

    /// The field at `field_path` must equal one of `allowed`.
    AllowedValues {
        field_path: String,
        allowed: Vec<Value>,
    },

    /// Delegate to a named function registered by the hosting application.
    Custom {
        function_name: String,
    },
}

/// The result of running every rule in an `OutputSchema` against a body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    /// True only if all rules passed.
    pub passed: bool,
    /// All failures collected during this run. Empty on pass.
    pub failures: Vec<VerificationFailure>,
}

impl VerificationReport {
    /// Join every failure into one `[rule] message; ...` line for logs.
    pub fn summary(&self) -> String {
        self.failures
            .iter()
            .map(|f| format!("[{}] {}", f.rule_id, f.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// A single rule failure within a `VerificationReport`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationFailure {
    /// The `rule_id` of the rule that failed.
    pub rule_id: String,
    /// Human-readable explanation of why the rule failed.
    pub message: String,
}
