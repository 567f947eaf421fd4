//! The triage response contract as an `OutputSchema`.

use serde_json::{json, Value};
use tracing::warn;

use triage_contracts::{
    assessment::TriageResult,
    error::{TriageError, TriageOutcome},
    urgency::Urgency,
    verify::{OutputSchema, VerificationRule, VerificationRuleType},
};
use triage_core::traits::Verifier;

use crate::engine::SchemaVerifier;

pub const TRIAGE_RESPONSE_SCHEMA_ID: &str = "triage-response-v1";

/// Name under which `SchemaVerifier::for_triage_responses` registers the
/// non-blank summary check.
pub const SUMMARY_NOT_BLANK: &str = "summary-not-blank";

/// Schema for the body returned by `POST /api/triage/assess`.
///
/// Extra fields are allowed and survive decoding.
pub fn triage_response_schema() -> OutputSchema {
    let urgency_labels: Vec<Value> = Urgency::ALL.iter().map(|u| json!(u.as_str())).collect();

    let json_schema = json!({
        "type": "object",
        "required": ["urgencyLevel", "summary", "recommendations", "nearbyResources"],
        "properties": {
            "urgencyLevel": { "type": "string", "enum": urgency_labels },
            "summary": { "type": "string" },
            "recommendations": {
                "type": "array",
                "items": { "type": "string" }
            },
            "nearbyResources": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["name", "type", "distance", "waitTime", "phone"],
                    "properties": {
                        "name": { "type": "string" },
                        "type": { "type": "string" },
                        "distance": { "type": "string" },
                        "waitTime": { "type": "string" },
                        "phone": { "type": "string" },
                        "address": { "type": "string" },
                        "lat": { "type": "number" },
                        "lng": { "type": "number" }
                    }
                }
            },
            "reasoning": { "type": "string" },
            "timestamp": { "type": "number" },
            "disclaimer": { "type": "string" }
        }
    });

    OutputSchema {
        schema_id: TRIAGE_RESPONSE_SCHEMA_ID.to_string(),
        json_schema,
        rules: vec![
            VerificationRule {
                rule_id: "urgency-label".to_string(),
                description: "urgencyLevel must be low, moderate or high".to_string(),
                rule_type: VerificationRuleType::AllowedValues {
                    field_path: "urgencyLevel".to_string(),
                    allowed: urgency_labels,
                },
            },
            VerificationRule {
                rule_id: "summary-present".to_string(),
                description: "summary must be present".to_string(),
                rule_type: VerificationRuleType::RequiredField {
                    field_path: "summary".to_string(),
                },
            },
            VerificationRule {
                rule_id: "summary-text".to_string(),
                description: "summary must contain text".to_string(),
                rule_type: VerificationRuleType::Custom {
                    function_name: SUMMARY_NOT_BLANK.to_string(),
                },
            },
        ],
    }
}

impl SchemaVerifier {
    /// A verifier with the custom checks `triage_response_schema` refers to.
    pub fn for_triage_responses() -> Self {
        let mut verifier = Self::new();
        verifier.register_rule(
            SUMMARY_NOT_BLANK,
            Box::new(|body| match body.get("summary").and_then(Value::as_str) {
                Some(s) if !s.trim().is_empty() => None,
                _ => Some("summary is blank".to_string()),
            }),
        );
        verifier
    }
}

/// Verify `body` as a triage response and decode it.
///
/// A failing report becomes `VerificationFailed`; a passing body that still
/// does not decode becomes `InvalidResponse`.
pub fn accept_triage_response(verifier: &dyn Verifier, body: Value) -> TriageOutcome<TriageResult> {
    let report = verifier.verify(&body, &triage_response_schema())?;
    if !report.passed {
        let reason = report.summary();
        warn!(%reason, "triage response rejected");
        return Err(TriageError::VerificationFailed { reason });
    }
    serde_json::from_value(body).map_err(|e| TriageError::InvalidResponse {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use triage_contracts::{error::TriageError, urgency::Urgency};

    use super::*;

    fn well_formed() -> Value {
        json!({
            "urgencyLevel": "moderate",
            "summary": "See a clinician within a day.",
            "recommendations": ["Rest", "Hydrate"],
            "nearbyResources": [{
                "name": "Mission Bay Clinic",
                "type": "Clinic",
                "distance": "1.5 miles",
                "waitTime": "20-40 min",
                "phone": "(555) 234-5678"
            }],
            "disclaimer": "informational only",
            "timestamp": 1700000000.5
        })
    }

    #[test]
    fn accepts_well_formed_body() {
        let verifier = SchemaVerifier::for_triage_responses();
        let result = accept_triage_response(&verifier, well_formed()).unwrap();

        assert_eq!(result.urgency_level, Urgency::Moderate);
        assert_eq!(result.recommendations.len(), 2);
        assert_eq!(result.nearby_resources[0].kind, "Clinic");
        assert_eq!(result.disclaimer.as_deref(), Some("informational only"));
    }

    #[test]
    fn accepted_body_keeps_its_exact_shape() {
        let verifier = SchemaVerifier::for_triage_responses();
        let mut body = well_formed();
        body["timestamp"] = json!(1700000000);
        body["confidence"] = json!(0.9);
        body["nearbyResources"][0]["lat"] = json!(38);
        body["nearbyResources"][0]["openNow"] = json!(true);

        let result = accept_triage_response(&verifier, body.clone()).unwrap();

        assert_eq!(result.timestamp_secs(), Some(1700000000.0));
        assert_eq!(result.extra["confidence"], json!(0.9));
        assert_eq!(serde_json::to_value(&result).unwrap(), body);
    }

    #[test]
    fn rejects_unknown_urgency() {
        let verifier = SchemaVerifier::for_triage_responses();
        let mut body = well_formed();
        body["urgencyLevel"] = json!("critical");

        match accept_triage_response(&verifier, body) {
            Err(TriageError::VerificationFailed { reason }) => {
                assert!(reason.contains("urgency-label"), "reason: {reason}");
            }
            other => panic!("expected VerificationFailed, got {:?}", other),
        }
    }

    #[test]
    fn rejects_blank_summary() {
        let verifier = SchemaVerifier::for_triage_responses();
        let mut body = well_formed();
        body["summary"] = json!("   ");

        let err = accept_triage_response(&verifier, body).unwrap_err();
        assert!(err.to_string().contains("summary is blank"));
    }

    #[test]
    fn rejects_resource_missing_phone() {
        let verifier = SchemaVerifier::for_triage_responses();
        let mut body = well_formed();
        body["nearbyResources"][0]
            .as_object_mut()
            .unwrap()
            .remove("phone");

        assert!(matches!(
            accept_triage_response(&verifier, body),
            Err(TriageError::VerificationFailed { .. })
        ));
    }

    #[test]
    fn rejects_non_object_body() {
        let verifier = SchemaVerifier::for_triage_responses();
        assert!(accept_triage_response(&verifier, json!("not an object")).is_err());
    }

    /// A plain verifier has no custom check registered, so the schema fails.
    #[test]
    fn plain_verifier_flags_missing_custom_rule() {
        let verifier = SchemaVerifier::new();
        let err = accept_triage_response(&verifier, well_formed()).unwrap_err();
        assert!(err.to_string().contains(SUMMARY_NOT_BLANK));
    }
}
