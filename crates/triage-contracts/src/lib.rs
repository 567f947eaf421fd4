//! # triage-contracts
//!
//! Shared types, wire shapes, and errors for the triage workspace.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate: only data definitions, display policy and error types.

pub mod assessment;
pub mod condition;
pub mod error;
pub mod urgency;
pub mod verify;

#[cfg(test)]
mod tests {
    use serde_json::{json, Number};

    use super::*;
    use assessment::{NearbyResource, SubmissionId, TriageResult};
    use error::TriageError;
    use urgency::{color_class_for, Urgency};

    // ── Urgency ──────────────────────────────────────────────────────────────

    #[test]
    fn urgency_parses_case_insensitively() {
        assert_eq!("HIGH".parse::<Urgency>().unwrap(), Urgency::High);
        assert_eq!(" moderate ".parse::<Urgency>().unwrap(), Urgency::Moderate);
        assert_eq!("low".parse::<Urgency>().unwrap(), Urgency::Low);
    }

    #[test]
    fn urgency_rejects_unknown_label() {
        let err = "critical".parse::<Urgency>().unwrap_err();
        match err {
            TriageError::UnknownUrgency { value } => assert_eq!(value, "critical"),
            other => panic!("expected UnknownUrgency, got {:?}", other),
        }
    }

    #[test]
    fn urgency_orders_by_priority() {
        assert!(Urgency::Low < Urgency::Moderate);
        assert!(Urgency::Moderate < Urgency::High);
        assert_eq!(Urgency::ALL.iter().max(), Some(&Urgency::High));
    }

    #[test]
    fn urgency_color_policy() {
        assert_eq!(Urgency::High.color_class(), "red");
        assert_eq!(Urgency::Moderate.color_class(), "orange");
        assert_eq!(Urgency::Low.color_class(), "green");
        assert_eq!(color_class_for("high"), "red");
        assert_eq!(color_class_for("urgent"), "gray");
        assert_eq!(color_class_for(""), "gray");
    }

    #[test]
    fn urgency_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Urgency::Moderate).unwrap(), json!("moderate"));
    }

    // ── TriageResult wire shape ──────────────────────────────────────────────

    #[test]
    fn triage_result_uses_camel_case_wire_names() {
        let result = TriageResult {
            urgency_level: Urgency::Low,
            summary: "mild".to_string(),
            recommendations: vec!["rest".to_string()],
            nearby_resources: vec![NearbyResource {
                name: "Mission Bay Clinic".to_string(),
                kind: "Clinic".to_string(),
                distance: "1.5 miles".to_string(),
                wait_time: "20-40 min".to_string(),
                phone: "(555) 234-5678".to_string(),
                address: None,
                lat: None,
                lng: None,
                extra: Default::default(),
            }],
            reasoning: None,
            timestamp: None,
            disclaimer: None,
            extra: Default::default(),
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["urgencyLevel"], json!("low"));
        assert_eq!(value["nearbyResources"][0]["type"], json!("Clinic"));
        assert_eq!(value["nearbyResources"][0]["waitTime"], json!("20-40 min"));

        // Absent optional fields never reach the wire.
        assert!(value.get("reasoning").is_none());
        assert!(value["nearbyResources"][0].get("lat").is_none());
    }

    #[test]
    fn triage_result_accepts_service_extras() {
        let body = json!({
            "urgencyLevel": "high",
            "summary": "seek care",
            "recommendations": ["Call 911 if symptoms are severe"],
            "nearbyResources": [{
                "name": "SF General Hospital",
                "type": "Emergency Room",
                "distance": "3.2 miles",
                "waitTime": "60-90 min",
                "phone": "(555) 456-7890",
                "address": "1001 Potrero Ave, San Francisco, CA",
                "lat": 37.7562,
                "lng": -122.4041
            }],
            "reasoning": "urgent",
            "timestamp": 1700000000.5,
            "disclaimer": "informational only"
        });

        let decoded: TriageResult = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(decoded.urgency_level, Urgency::High);
        assert_eq!(decoded.nearby_resources[0].lat, Number::from_f64(37.7562));

        // Decoding then encoding reproduces the document.
        assert_eq!(serde_json::to_value(&decoded).unwrap(), body);
    }

    #[test]
    fn triage_result_keeps_integer_numbers_and_unknown_fields() {
        let body = json!({
            "urgencyLevel": "low",
            "summary": "mild",
            "recommendations": [],
            "nearbyResources": [{
                "name": "Mission Bay Clinic",
                "type": "Clinic",
                "distance": "1.5 miles",
                "waitTime": "20-40 min",
                "phone": "(555) 234-5678",
                "lat": 37,
                "rating": 4
            }],
            "timestamp": 1700000000,
            "confidence": 0.9
        });

        let decoded: TriageResult = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(decoded.timestamp, Some(Number::from(1700000000u64)));
        assert_eq!(decoded.nearby_resources[0].extra["rating"], json!(4));
        assert_eq!(decoded.extra["confidence"], json!(0.9));
        assert_eq!(serde_json::to_value(&decoded).unwrap(), body);
    }

    // ── SubmissionId ─────────────────────────────────────────────────────────

    #[test]
    fn submission_id_new_produces_unique_values() {
        let ids: std::collections::HashSet<String> =
            (0..100).map(|_| SubmissionId::new().0.to_string()).collect();
        assert_eq!(ids.len(), 100);
    }

    // ── TriageError display messages ─────────────────────────────────────────

    #[test]
    fn error_upstream_status_display() {
        let err = TriageError::UpstreamStatus { status: 503 };
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn error_transport_display() {
        let err = TriageError::Transport {
            reason: "connection refused".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("transport failure"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn error_verification_failed_display() {
        let err = TriageError::VerificationFailed {
            reason: "required field missing".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("verification failed"));
        assert!(msg.contains("required field missing"));
    }

    #[test]
    fn error_config_error_display() {
        let err = TriageError::ConfigError {
            reason: "missing rules path".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("missing rules path"));
    }

    #[test]
    fn error_empty_symptoms_display() {
        assert_eq!(TriageError::EmptySymptoms.to_string(), "symptom text is empty");
    }

    // ── VerificationReport ───────────────────────────────────────────────────

    #[test]
    fn verification_report_summary_joins_failures() {
        let report = verify::VerificationReport {
            passed: false,
            failures: vec![
                verify::VerificationFailure {
                    rule_id: "a".to_string(),
                    message: "first".to_string(),
                },
                verify::VerificationFailure {
                    rule_id: "b".to_string(),
                    message: "second".to_string(),
                },
            ],
        };
        assert_eq!(report.summary(), "[a] first; [b] second");
    }
}
