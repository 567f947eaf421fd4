//! Trait seams between the triage crates.
//!
//! - `ConfidenceSource`: where the classifier's confidence score comes from
//! - `UrgencyEngine`: turns symptom text into an urgency verdict (service side)
//! - `Verifier`: checks a response body before it is trusted (client side)
//!
//! Implementations live in the crates that own each concern; this crate
//! only wires the classifier to its confidence source.

use triage_contracts::{
    assessment::UrgencyAssessment,
    error::TriageOutcome,
    verify::{OutputSchema, VerificationReport},
};

/// Produces the confidence percentage attached to an analysis.
///
/// The value is deliberately unrelated to how well the text matched.
pub trait ConfidenceSource: Send + Sync {
    /// Return a percentage in `80..=100`.
    fn draw(&self) -> u8;
}

/// Decides how urgent a block of symptom text is.
///
/// Implementations are deterministic and do no I/O on the evaluation path.
pub trait UrgencyEngine: Send + Sync {
    /// Evaluate `symptoms`. Callers guarantee the text is not blank.
    fn evaluate(&self, symptoms: &str) -> TriageOutcome<UrgencyAssessment>;
}

/// Checks an untrusted JSON body against a declarative `OutputSchema`.
///
/// Return a report with `passed = true` if all rules pass, or
/// `passed = false` with populated `failures` otherwise. `Err` is reserved
/// for failures of the verifier itself.
pub trait Verifier: Send + Sync {
    fn verify(
        &self,
        body: &serde_json::Value,
        schema: &OutputSchema,
    ) -> TriageOutcome<VerificationReport>;
}
