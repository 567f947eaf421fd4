//! The local keyword classifier.
//!
//! Classification is a decision table, not inference:
//!
//!   lowercase text → first keyword group with a substring hit → catalog record
//!
//! When no group matches, the respiratory record is used. The result records
//! which keyword fired (or `None` for the default) so the two cases stay
//! distinguishable even though they produce the same condition.

use rand::Rng;
use tracing::debug;

use triage_contracts::{
    condition::{AnalysisResult, ConditionKey},
    error::{TriageError, TriageOutcome},
};

use crate::{
    catalog::{self, DEFAULT_CONDITION, KEYWORD_GROUPS},
    traits::ConfidenceSource,
};

/// Lowest confidence the classifier reports.
pub const MIN_CONFIDENCE: u8 = 80;
/// Highest confidence the classifier reports.
pub const MAX_CONFIDENCE: u8 = 100;

/// Uniform draw from `MIN_CONFIDENCE..=MAX_CONFIDENCE` using the thread RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformConfidence;

impl ConfidenceSource for UniformConfidence {
    fn draw(&self) -> u8 {
        rand::thread_rng().gen_range(MIN_CONFIDENCE..=MAX_CONFIDENCE)
    }
}

/// Which condition a text selected, and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub key: ConditionKey,
    /// `None` when the default category was applied.
    pub keyword: Option<&'static str>,
}

/// Maps free-text symptoms to one of the four catalog conditions.
pub struct SymptomClassifier {
    confidence: Box<dyn ConfidenceSource>,
}

impl SymptomClassifier {
    /// A classifier drawing confidence uniformly at random.
    pub fn new() -> Self {
        Self::with_confidence_source(Box::new(UniformConfidence))
    }

    /// A classifier with a caller-supplied confidence source.
    pub fn with_confidence_source(confidence: Box<dyn ConfidenceSource>) -> Self {
        Self { confidence }
    }

    /// Run the keyword table over `text` without building a result.
    pub fn detect(&self, text: &str) -> Detection {
        let lowered = text.to_lowercase();
        for (key, keywords) in KEYWORD_GROUPS {
            if let Some(kw) = keywords.iter().find(|kw| lowered.contains(*kw)) {
                return Detection {
                    key,
                    keyword: Some(*kw),
                };
            }
        }
        Detection {
            key: DEFAULT_CONDITION,
            keyword: None,
        }
    }

    /// Classify `text` into an `AnalysisResult`.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::EmptySymptoms` when `text` is empty or
    /// whitespace only.
    pub fn classify(&self, text: &str) -> TriageOutcome<AnalysisResult> {
        if text.trim().is_empty() {
            return Err(TriageError::EmptySymptoms);
        }

        let detection = self.detect(text);
        let confidence = self
            .confidence
            .draw()
            .clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);

        debug!(
            condition = detection.key.as_str(),
            keyword = detection.keyword.unwrap_or("<default>"),
            confidence,
            "symptoms classified"
        );

        Ok(AnalysisResult::from_record(
            catalog::record(detection.key),
            confidence,
            detection.keyword,
        ))
    }
}

impl Default for SymptomClassifier {
    fn default() -> Self {
        Self::new()
    }
}
