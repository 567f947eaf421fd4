//! Wire shapes exchanged between the triage client and the triage service.
//!
//! Field names on the wire are camelCase. Optional fields emitted only by
//! the service are skipped when absent. Numbers keep their JSON form and
//! unrecognised fields are carried in `extra`, so a value decoded from the
//! wire serializes back to the same document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::urgency::Urgency;

/// Correlates one triage submission across client log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub uuid::Uuid);

impl SubmissionId {
    /// Create a new, unique submission ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Request body for `POST /api/triage/assess`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageRequest {
    pub symptoms: String,
    /// Free text; may be empty.
    #[serde(default)]
    pub location: String,
}

/// A care facility suggested alongside an assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyResource {
    pub name: String,
    /// Facility kind, e.g. "Urgent Care" or "Emergency Room".
    #[serde(rename = "type")]
    pub kind: String,
    pub distance: String,
    pub wait_time: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<Number>,
    /// Fields this crate does not model, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The assessment returned by the triage endpoint, or the local fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageResult {
    pub urgency_level: Urgency,
    pub summary: String,
    pub recommendations: Vec<String>,
    pub nearby_resources: Vec<NearbyResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
    /// Unix seconds at which the service produced the assessment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<String>,
    /// Fields this crate does not model, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TriageResult {
    /// `timestamp` as fractional Unix seconds.
    pub fn timestamp_secs(&self) -> Option<f64> {
        self.timestamp.as_ref().and_then(Number::as_f64)
    }
}

/// The urgency verdict an engine produces for a block of symptom text,
/// before nearby resources are attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrgencyAssessment {
    pub urgency_level: Urgency,
    pub summary: String,
    pub recommendations: Vec<String>,
    pub reasoning: String,
}

/// Body of `GET /api/triage/resources`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceListing {
    pub resources: Vec<NearbyResource>,
    pub total: usize,
}

/// Body of `GET /api/triage/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    #[serde(default)]
    pub version: String,
    pub timestamp: f64,
}
