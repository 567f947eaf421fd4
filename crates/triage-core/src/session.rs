//! Per-interaction intake state: the two inputs, two busy flags, and two
//! result slots.
//!
//! Each operation (local analysis, remote triage) owns a `ResultSlot`. A slot
//! hands out monotonically increasing request ids and applies a completion
//! only when its id is still the latest one issued. Cancelling a slot, or
//! beginning a newer request after a cancel, turns every older in-flight
//! request stale, and its result is dropped when it eventually arrives.

use tracing::debug;

use triage_contracts::{
    assessment::{TriageRequest, TriageResult},
    condition::AnalysisResult,
};

/// Identifies one triggered operation within a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

/// One operation's busy flag and most recent result.
#[derive(Debug, Clone)]
pub struct ResultSlot<T> {
    busy: bool,
    latest: u64,
    value: Option<T>,
}

impl<T> ResultSlot<T> {
    pub fn new() -> Self {
        Self {
            busy: false,
            latest: 0,
            value: None,
        }
    }

    /// True while a request is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// The most recently applied result.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Mark the slot busy and issue a new request id.
    ///
    /// Returns `None` while another request is in flight; the trigger is
    /// disabled, not queued.
    pub fn begin(&mut self) -> Option<RequestId> {
        if self.busy {
            return None;
        }
        self.latest += 1;
        self.busy = true;
        Some(RequestId(self.latest))
    }

    /// Apply `value` if `id` is the latest request. Returns whether it was applied.
    ///
    /// An applied value replaces the previous one wholesale and clears the
    /// busy flag.
    pub fn complete(&mut self, id: RequestId, value: T) -> bool {
        if id.0 != self.latest || !self.busy {
            debug!(request_id = id.0, latest = self.latest, "discarding stale result");
            return false;
        }
        self.value = Some(value);
        self.busy = false;
        true
    }

    /// Clear the busy flag after request `id` failed, keeping the previous
    /// value. Returns false for stale ids.
    pub fn fail(&mut self, id: RequestId) -> bool {
        if id.0 != self.latest || !self.busy {
            return false;
        }
        self.busy = false;
        true
    }

    /// Abandon the in-flight request, if any. Its result will be discarded.
    pub fn cancel(&mut self) {
        if self.busy {
            self.latest += 1;
            self.busy = false;
        }
    }

    /// Drop the stored result. Does not affect an in-flight request.
    pub fn clear(&mut self) {
        self.value = None;
    }
}

impl<T> Default for ResultSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// What a caller needs to run a triggered analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTicket {
    pub id: RequestId,
    pub symptoms: String,
}

/// What a caller needs to run a triggered triage submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageTicket {
    pub id: RequestId,
    pub request: TriageRequest,
}

/// Everything one intake screen holds between user actions.
#[derive(Debug, Default)]
pub struct IntakeSession {
    pub symptoms: String,
    pub location: String,
    analysis: ResultSlot<AnalysisResult>,
    triage: ResultSlot<TriageResult>,
}

impl IntakeSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the symptom text has something other than whitespace.
    pub fn has_symptoms(&self) -> bool {
        !self.symptoms.trim().is_empty()
    }

    /// Whether the analysis trigger should be enabled.
    pub fn can_analyze(&self) -> bool {
        self.has_symptoms() && !self.analysis.is_busy()
    }

    /// Whether the triage trigger should be enabled.
    pub fn can_submit_triage(&self) -> bool {
        self.has_symptoms() && !self.triage.is_busy()
    }

    /// Trigger an analysis. `None` (and no state change) when disabled.
    pub fn begin_analysis(&mut self) -> Option<AnalysisTicket> {
        if !self.has_symptoms() {
            return None;
        }
        let id = self.analysis.begin()?;
        Some(AnalysisTicket {
            id,
            symptoms: self.symptoms.clone(),
        })
    }

    /// Trigger a triage submission. `None` (and no state change) when disabled.
    pub fn begin_triage(&mut self) -> Option<TriageTicket> {
        if !self.has_symptoms() {
            return None;
        }
        let id = self.triage.begin()?;
        Some(TriageTicket {
            id,
            request: TriageRequest {
                symptoms: self.symptoms.clone(),
                location: self.location.clone(),
            },
        })
    }

    pub fn finish_analysis(&mut self, id: RequestId, result: AnalysisResult) -> bool {
        self.analysis.complete(id, result)
    }

    pub fn finish_triage(&mut self, id: RequestId, result: TriageResult) -> bool {
        self.triage.complete(id, result)
    }

    /// Release the analysis trigger after request `id` failed.
    pub fn fail_analysis(&mut self, id: RequestId) -> bool {
        self.analysis.fail(id)
    }

    /// Abandon an in-flight analysis and hide its result.
    pub fn cancel_analysis(&mut self) {
        self.analysis.cancel();
        self.analysis.clear();
    }

    pub fn analysis(&self) -> &ResultSlot<AnalysisResult> {
        &self.analysis
    }

    pub fn triage(&self) -> &ResultSlot<TriageResult> {
        &self.triage
    }
}

#[cfg(test)]
mod tests {
    use triage_contracts::urgency::Urgency;

    use super::*;
    use crate::classifier::SymptomClassifier;

    fn analysis(text: &str) -> AnalysisResult {
        SymptomClassifier::new().classify(text).unwrap()
    }

    fn triage(summary: &str) -> TriageResult {
        TriageResult {
            urgency_level: Urgency::Low,
            summary: summary.to_string(),
            recommendations: vec![],
            nearby_resources: vec![],
            reasoning: None,
            timestamp: None,
            disclaimer: None,
            extra: Default::default(),
        }
    }

    // ── ResultSlot ───────────────────────────────────────────────────────────

    #[test]
    fn slot_ids_increase_monotonically() {
        let mut slot: ResultSlot<u32> = ResultSlot::new();
        let a = slot.begin().unwrap();
        assert!(slot.complete(a, 1));
        let b = slot.begin().unwrap();
        assert!(b > a);
    }

    #[test]
    fn slot_refuses_second_begin_while_busy() {
        let mut slot: ResultSlot<u32> = ResultSlot::new();
        assert!(slot.begin().is_some());
        assert!(slot.is_busy());
        assert!(slot.begin().is_none());
    }

    #[test]
    fn cancelled_request_result_is_discarded() {
        let mut slot: ResultSlot<&str> = ResultSlot::new();
        let first = slot.begin().unwrap();
        slot.cancel();
        let second = slot.begin().unwrap();

        // The newer request resolves first, then the stale one arrives late.
        assert!(slot.complete(second, "second"));
        assert!(!slot.complete(first, "first"));
        assert_eq!(slot.value(), Some(&"second"));
    }

    #[test]
    fn stale_result_arriving_before_newer_is_still_discarded() {
        let mut slot: ResultSlot<&str> = ResultSlot::new();
        let first = slot.begin().unwrap();
        slot.cancel();
        let second = slot.begin().unwrap();

        assert!(!slot.complete(first, "first"));
        assert!(slot.is_busy(), "newer request still in flight");
        assert!(slot.complete(second, "second"));
        assert!(!slot.is_busy());
    }

    #[test]
    fn duplicate_completion_is_ignored() {
        let mut slot: ResultSlot<u32> = ResultSlot::new();
        let id = slot.begin().unwrap();
        assert!(slot.complete(id, 1));
        assert!(!slot.complete(id, 2));
        assert_eq!(slot.value(), Some(&1));
    }

    #[test]
    fn failed_request_releases_slot_and_keeps_value() {
        let mut slot: ResultSlot<u32> = ResultSlot::new();
        let a = slot.begin().unwrap();
        slot.complete(a, 7);

        let b = slot.begin().unwrap();
        assert!(!slot.fail(a), "stale id");
        assert!(slot.fail(b));
        assert!(!slot.is_busy());
        assert_eq!(slot.value(), Some(&7));
    }

    // ── IntakeSession ────────────────────────────────────────────────────────

    #[test]
    fn blank_symptoms_suppress_both_triggers() {
        let mut session = IntakeSession::new();
        session.symptoms = "   ".to_string();

        assert!(!session.can_analyze());
        assert!(!session.can_submit_triage());
        assert!(session.begin_analysis().is_none());
        assert!(session.begin_triage().is_none());
        assert!(!session.analysis().is_busy());
        assert!(!session.triage().is_busy());
        assert!(session.analysis().value().is_none());
    }

    #[test]
    fn triage_ticket_snapshots_inputs() {
        let mut session = IntakeSession::new();
        session.symptoms = "chest pain".to_string();
        session.location = "San Francisco".to_string();

        let ticket = session.begin_triage().unwrap();
        session.symptoms.clear();

        assert_eq!(ticket.request.symptoms, "chest pain");
        assert_eq!(ticket.request.location, "San Francisco");
    }

    #[test]
    fn operations_are_independent() {
        let mut session = IntakeSession::new();
        session.symptoms = "fever".to_string();

        let a = session.begin_analysis().unwrap();
        let t = session.begin_triage().unwrap();
        assert!(!session.can_analyze());
        assert!(!session.can_submit_triage());

        assert!(session.finish_triage(t.id, triage("done")));
        assert!(session.analysis().is_busy());
        assert!(session.finish_analysis(a.id, analysis(&a.symptoms)));
        assert_eq!(session.triage().value().unwrap().summary, "done");
        assert_eq!(session.analysis().value().unwrap().condition, "Fever/Infection");
    }

    #[test]
    fn cancel_analysis_discards_late_result() {
        let mut session = IntakeSession::new();
        session.symptoms = "cough".to_string();

        let ticket = session.begin_analysis().unwrap();
        session.cancel_analysis();

        assert!(!session.finish_analysis(ticket.id, analysis("cough")));
        assert!(session.analysis().value().is_none());
        assert!(session.can_analyze());
    }

    #[test]
    fn new_result_replaces_previous_wholesale() {
        let mut session = IntakeSession::new();
        session.symptoms = "migraine".to_string();
        let first = session.begin_analysis().unwrap();
        session.finish_analysis(first.id, analysis("migraine"));

        session.symptoms = "vomiting".to_string();
        let second = session.begin_analysis().unwrap();
        session.finish_analysis(second.id, analysis("vomiting"));

        assert_eq!(
            session.analysis().value().unwrap().condition,
            "Gastrointestinal Issues"
        );
    }
}
