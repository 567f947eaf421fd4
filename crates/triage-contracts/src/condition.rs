//! Condition records and the analysis result derived from them.
//!
//! A `ConditionRecord` is static catalog data; an `AnalysisResult` is the
//! per-call copy handed to the caller, stamped with a fresh confidence.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::urgency::Urgency;

/// The four condition categories the local classifier can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionKey {
    Fever,
    Respiratory,
    Headache,
    Gastrointestinal,
}

impl ConditionKey {
    /// The lowercase catalog key.
    pub fn as_str(self) -> &'static str {
        match self {
            ConditionKey::Fever => "fever",
            ConditionKey::Respiratory => "respiratory",
            ConditionKey::Headache => "headache",
            ConditionKey::Gastrointestinal => "gastrointestinal",
        }
    }
}

/// One bar of a condition's symptom profile.
///
/// `value` is a relative severity weight in `0..=100`; the weights of a
/// profile need not sum to 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomWeight {
    pub name: Cow<'static, str>,
    pub value: u8,
    pub severity: Urgency,
}

/// One bar of a condition's treatment profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentOption {
    pub name: Cow<'static, str>,
    /// Relative effectiveness in `0..=100`.
    pub effectiveness: u8,
    /// 1 is the first thing to try.
    pub priority: u8,
}

/// A static, named bundle of profiles and advice for one condition.
///
/// Records live for the whole process and are never mutated.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionRecord {
    pub key: ConditionKey,
    pub name: &'static str,
    pub symptom_profile: &'static [SymptomWeight],
    pub treatment_profile: &'static [TreatmentOption],
    pub urgency: Urgency,
    pub description: &'static str,
    pub recommendations: &'static [&'static str],
}

/// The output of one local classification.
///
/// Everything except `confidence` and `matched_keyword` is copied from the
/// matched `ConditionRecord`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub condition_key: ConditionKey,
    /// Display name of the matched condition.
    pub condition: String,
    pub urgency: Urgency,
    pub description: String,
    pub symptom_profile: Vec<SymptomWeight>,
    pub treatment_profile: Vec<TreatmentOption>,
    pub recommendations: Vec<String>,
    /// Integer percentage in `80..=100`, drawn fresh for every call.
    pub confidence: u8,
    /// The keyword that selected the condition; `None` when the default
    /// category was applied because nothing matched.
    pub matched_keyword: Option<String>,
}

impl AnalysisResult {
    /// Build a result from a catalog record.
    pub fn from_record(
        record: &ConditionRecord,
        confidence: u8,
        matched_keyword: Option<&str>,
    ) -> Self {
        Self {
            condition_key: record.key,
            condition: record.name.to_string(),
            urgency: record.urgency,
            description: record.description.to_string(),
            symptom_profile: record.symptom_profile.to_vec(),
            treatment_profile: record.treatment_profile.to_vec(),
            recommendations: record.recommendations.iter().map(|r| r.to_string()).collect(),
            confidence,
            matched_keyword: matched_keyword.map(str::to_string),
        }
    }

    /// True when no keyword matched and the default category was used.
    pub fn is_default(&self) -> bool {
        self.matched_keyword.is_none()
    }
}
