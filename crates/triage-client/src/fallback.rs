//! The fixed assessment returned when the triage endpoint cannot be used.

use triage_contracts::{
    assessment::{NearbyResource, TriageResult},
    urgency::Urgency,
};

pub const FALLBACK_SUMMARY: &str = "Unable to connect to AI service. This is a fallback assessment. Please consult a healthcare professional.";

pub const FALLBACK_RECOMMENDATIONS: [&str; 3] = [
    "Consult with a healthcare professional",
    "Monitor symptoms closely",
    "Seek immediate care if symptoms worsen",
];

/// Moderate urgency, generic advice and a single urgent care listing.
pub fn fallback_assessment() -> TriageResult {
    TriageResult {
        urgency_level: Urgency::Moderate,
        summary: FALLBACK_SUMMARY.to_string(),
        recommendations: FALLBACK_RECOMMENDATIONS.iter().map(|s| s.to_string()).collect(),
        nearby_resources: vec![NearbyResource {
            name: "Bay Area Urgent Care".to_string(),
            kind: "Urgent Care".to_string(),
            distance: "0.8 miles".to_string(),
            wait_time: "15-30 min".to_string(),
            phone: "(555) 123-4567".to_string(),
            address: None,
            lat: None,
            lng: None,
            extra: Default::default(),
        }],
        reasoning: None,
        timestamp: None,
        disclaimer: None,
        extra: Default::default(),
    }
}
