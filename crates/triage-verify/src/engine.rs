//! Schema-based response verifier.
//!
//! `SchemaVerifier` implements the `Verifier` trait from `triage-core`.
//! Verification runs in two phases:
//!
//! 1. **Structural**: the body is validated against the
//!    `OutputSchema::json_schema` document using the `jsonschema` crate.
//! 2. **Semantic**: each `VerificationRule` in `OutputSchema::rules` is
//!    evaluated in order. All failures are collected before returning.
//!
//! Custom rules delegate to named functions registered via `register_rule`.

use std::collections::HashMap;

use tracing::{debug, warn};

use triage_contracts::{
    error::TriageOutcome,
    verify::{OutputSchema, VerificationFailure, VerificationReport, VerificationRuleType},
};
use triage_core::traits::Verifier;

/// A caller-supplied verification function.
///
/// Receives the full body. Returns `Some(message)` when the check fails, or
/// `None` on success.
pub type CustomVerifierFn = Box<dyn Fn(&serde_json::Value) -> Option<String> + Send + Sync>;

/// Combines JSON Schema structural validation with a set of semantic rules.
pub struct SchemaVerifier {
    custom_rules: HashMap<String, CustomVerifierFn>,
}

impl SchemaVerifier {
    /// Create a verifier with no custom rules registered.
    pub fn new() -> Self {
        Self {
            custom_rules: HashMap::new(),
        }
    }

    /// Register a custom verification function under `name`.
    ///
    /// The name must match the `function_name` used in
    /// `VerificationRuleType::Custom` rules. Registering the same name twice
    /// replaces the previous function.
    pub fn register_rule(&mut self, name: impl Into<String>, f: CustomVerifierFn) {
        self.custom_rules.insert(name.into(), f);
    }

    // ── Internal helpers ──────────────────────────────────────────────────────

    /// Resolve a dot-notation field path (e.g. `"nearbyResources.0.name"`)
    /// against a JSON value. Numeric segments index into arrays. Returns
    /// `None` when any segment is missing or the value is JSON `null`.
    fn resolve_path<'v>(value: &'v serde_json::Value, path: &str) -> Option<&'v serde_json::Value> {
        let mut current = value;
        for segment in path.split('.') {
            let next = match current {
                serde_json::Value::Array(items) => {
                    segment.parse::<usize>().ok().and_then(|i| items.get(i))
                }
                _ => current.get(segment),
            };
            match next {
                Some(v) if !v.is_null() => current = v,
                _ => return None,
            }
        }
        Some(current)
    }
}

impl Default for SchemaVerifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Verifier for SchemaVerifier {
    /// Verify `body` against `schema`.
    ///
    /// Runs structural JSON Schema validation first, then evaluates every
    /// semantic rule. All failures are accumulated into one report.
    fn verify(
        &self,
        body: &serde_json::Value,
        schema: &OutputSchema,
    ) -> TriageOutcome<VerificationReport> {
        let mut failures: Vec<VerificationFailure> = Vec::new();

        // ── Phase 1: JSON Schema structural validation ────────────────────────
        //
        // A null json_schema means "no structural constraint".
        if !schema.json_schema.is_null() {
            match jsonschema::validator_for(&schema.json_schema) {
                Ok(validator) => {
                    for error in validator.iter_errors(body) {
                        let message = format!(
                            "JSON Schema violation at {}: {}",
                            error.instance_path, error
                        );
                        warn!(schema_id = %schema.schema_id, %message, "structural validation failure");
                        failures.push(VerificationFailure {
                            rule_id: "json-schema".to_string(),
                            message,
                        });
                    }
                }
                Err(e) => {
                    let message = format!("invalid JSON Schema document: {e}");
                    warn!(schema_id = %schema.schema_id, %message, "schema compilation failure");
                    failures.push(VerificationFailure {
                        rule_id: "json-schema".to_string(),
                        message,
                    });
                }
            }
        }

        // ── Phase 2: Semantic rule evaluation ────────────────────────────────
        for rule in &schema.rules {
            debug!(
                rule_id = %rule.rule_id,
                description = %rule.description,
                "evaluating verification rule"
            );

            let failure_msg: Option<String> = match &rule.rule_type {
                VerificationRuleType::RequiredField { field_path } => {
                    if Self::resolve_path(body, field_path).is_none() {
                        Some(format!("required field '{field_path}' is missing or null"))
                    } else {
                        None
                    }
                }

                VerificationRuleType::AllowedValues { field_path, allowed } => {
                    match Self::resolve_path(body, field_path) {
                        None => Some(format!(
                            "field '{field_path}' is missing; cannot check allowed values"
                        )),
                        Some(actual) if allowed.contains(actual) => None,
                        Some(actual) => Some(format!(
                            "field '{field_path}' has value {actual} which is not in the allowed set"
                        )),
                    }
                }

                // An unregistered name is itself a failure.
                VerificationRuleType::Custom { function_name } => {
                    match self.custom_rules.get(function_name.as_str()) {
                        Some(f) => f(body),
                        None => Some(format!(
                            "no custom rule registered for function name '{function_name}'"
                        )),
                    }
                }
            };

            if let Some(message) = failure_msg {
                warn!(rule_id = %rule.rule_id, %message, "semantic rule failed");
                failures.push(VerificationFailure {
                    rule_id: rule.rule_id.clone(),
                    message,
                });
            }
        }

        let passed = failures.is_empty();
        debug!(
            schema_id = %schema.schema_id,
            passed,
            failure_count = failures.len(),
            "verification complete"
        );

        Ok(VerificationReport { passed, failures })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use serde_json::json;

    use triage_contracts::verify::{OutputSchema, VerificationRule, VerificationRuleType};
    use triage_core::traits::Verifier;

    use super::SchemaVerifier;

    // ── Builder helpers ───────────────────────────────────────────────────────

    fn make_schema(json_schema: serde_json::Value, rules: Vec<VerificationRule>) -> OutputSchema {
        OutputSchema {
            schema_id: "test-schema-v1".to_string(),
            json_schema,
            rules,
        }
    }

    fn rule(id: &str, desc: &str, rule_type: VerificationRuleType) -> VerificationRule {
        VerificationRule {
            rule_id: id.to_string(),
            description: desc.to_string(),
            rule_type,
        }
    }

    fn status_schema() -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "status": { "type": "string" }
            },
            "required": ["status"]
        })
    }

    // ── JSON Schema tests ─────────────────────────────────────────────────────

    #[test]
    fn test_schema_pass() {
        let verifier = SchemaVerifier::new();
        let schema = make_schema(status_schema(), vec![]);

        let report = verifier.verify(&json!({ "status": "ok" }), &schema).unwrap();

        assert!(report.passed, "expected pass, failures: {:?}", report.failures);
        assert!(report.failures.is_empty());
    }

    #[test]
    fn test_schema_fail() {
        let verifier = SchemaVerifier::new();
        let schema = make_schema(status_schema(), vec![]);

        let report = verifier.verify(&json!({ "other_field": 42 }), &schema).unwrap();

        assert!(!report.passed, "expected failure for missing required field");
        assert_eq!(report.failures[0].rule_id, "json-schema");
    }

    /// A broken schema document is reported, not raised.
    #[test]
    fn test_invalid_schema_document() {
        let verifier = SchemaVerifier::new();
        let schema = make_schema(json!({ "type": 12 }), vec![]);

        let report = verifier.verify(&json!({}), &schema).unwrap();

        assert!(!report.passed);
        assert!(report.failures[0].message.contains("invalid JSON Schema"));
    }

    // ── RequiredField tests ───────────────────────────────────────────────────

    #[test]
    fn test_required_field_pass() {
        let verifier = SchemaVerifier::new();
        let schema = make_schema(
            serde_json::Value::Null,
            vec![rule(
                "req-first-resource",
                "first resource must have a name",
                VerificationRuleType::RequiredField {
                    field_path: "nearbyResources.0.name".to_string(),
                },
            )],
        );

        let body = json!({ "nearbyResources": [{ "name": "Clinic" }] });
        let report = verifier.verify(&body, &schema).unwrap();

        assert!(report.passed, "expected pass, failures: {:?}", report.failures);
    }

    #[test]
    fn test_required_field_fail() {
        let verifier = SchemaVerifier::new();
        let schema = make_schema(
            serde_json::Value::Null,
            vec![rule(
                "req-summary",
                "summary must be present",
                VerificationRuleType::RequiredField {
                    field_path: "summary".to_string(),
                },
            )],
        );

        let report = verifier.verify(&json!({ "summary": null }), &schema).unwrap();

        assert!(!report.passed);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].rule_id, "req-summary");
        assert!(
            report.failures[0].message.contains("summary"),
            "failure message should name the missing field: {}",
            report.failures[0].message
        );
    }

    // ── AllowedValues tests ───────────────────────────────────────────────────

    fn urgency_rule() -> VerificationRule {
        rule(
            "allowed-urgency",
            "urgency must be a known label",
            VerificationRuleType::AllowedValues {
                field_path: "urgencyLevel".to_string(),
                allowed: vec![json!("low"), json!("moderate"), json!("high")],
            },
        )
    }

    #[test]
    fn test_allowed_values_pass() {
        let verifier = SchemaVerifier::new();
        let schema = make_schema(serde_json::Value::Null, vec![urgency_rule()]);

        let report = verifier.verify(&json!({ "urgencyLevel": "high" }), &schema).unwrap();

        assert!(report.passed, "expected pass, failures: {:?}", report.failures);
    }

    #[test]
    fn test_allowed_values_fail() {
        let verifier = SchemaVerifier::new();
        let schema = make_schema(serde_json::Value::Null, vec![urgency_rule()]);

        let report = verifier
            .verify(&json!({ "urgencyLevel": "critical" }), &schema)
            .unwrap();

        assert!(!report.passed);
        assert_eq!(report.failures[0].rule_id, "allowed-urgency");
    }

    // ── Custom rule tests ─────────────────────────────────────────────────────

    #[test]
    fn test_custom_rule_pass() {
        let mut verifier = SchemaVerifier::new();
        verifier.register_rule("always-pass", Box::new(|_body| None));

        let schema = make_schema(
            serde_json::Value::Null,
            vec![rule(
                "custom-check",
                "delegate to always-pass function",
                VerificationRuleType::Custom {
                    function_name: "always-pass".to_string(),
                },
            )],
        );

        let report = verifier.verify(&json!({ "field": "value" }), &schema).unwrap();

        assert!(report.passed, "expected pass, failures: {:?}", report.failures);
    }

    #[test]
    fn test_custom_rule_fail() {
        let mut verifier = SchemaVerifier::new();
        verifier.register_rule(
            "always-fail",
            Box::new(|_body| Some("custom check failed: condition not met".to_string())),
        );

        let schema = make_schema(
            serde_json::Value::Null,
            vec![rule(
                "custom-check",
                "delegate to always-fail function",
                VerificationRuleType::Custom {
                    function_name: "always-fail".to_string(),
                },
            )],
        );

        let report = verifier.verify(&json!({ "field": "value" }), &schema).unwrap();

        assert!(!report.passed);
        assert_eq!(report.failures[0].rule_id, "custom-check");
        assert!(report.failures[0].message.contains("condition not met"));
    }

    #[test]
    fn test_unregistered_custom_rule() {
        let verifier = SchemaVerifier::new();

        let schema = make_schema(
            serde_json::Value::Null,
            vec![rule(
                "phantom-check",
                "references a function that does not exist",
                VerificationRuleType::Custom {
                    function_name: "does-not-exist".to_string(),
                },
            )],
        );

        let report = verifier.verify(&json!({}), &schema).unwrap();

        assert!(!report.passed);
        assert!(report.failures[0].message.contains("does-not-exist"));
    }

    /// Every failing rule shows up, not just the first.
    #[test]
    fn test_failures_accumulate() {
        let verifier = SchemaVerifier::new();
        let schema = make_schema(
            status_schema(),
            vec![
                urgency_rule(),
                rule(
                    "req-summary",
                    "summary must be present",
                    VerificationRuleType::RequiredField {
                        field_path: "summary".to_string(),
                    },
                ),
            ],
        );

        let report = verifier.verify(&json!({}), &schema).unwrap();

        let ids: Vec<&str> = report.failures.iter().map(|f| f.rule_id.as_str()).collect();
        assert!(ids.contains(&"json-schema"));
        assert!(ids.contains(&"allowed-urgency"));
        assert!(ids.contains(&"req-summary"));
    }
}
