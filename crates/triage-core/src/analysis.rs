//! Asynchronous symptom analysis with simulated latency.
//!
//! `AnalysisRunner` models a remote inference call: it suspends for a fixed
//! delay (cooperatively, so the caller's event loop keeps running), then
//! classifies locally and notifies the registered completion callback.
//! There is no cancellation here; stale results are discarded by the
//! caller's `ResultSlot` instead.

use std::time::Duration;

use tracing::{debug, info};

use triage_contracts::{
    condition::AnalysisResult,
    error::{TriageError, TriageOutcome},
};

use crate::classifier::SymptomClassifier;

/// The delay applied when none is configured.
pub const DEFAULT_ANALYSIS_DELAY: Duration = Duration::from_millis(2000);

/// Invoked with every successfully produced result.
pub type CompletionCallback = Box<dyn Fn(&AnalysisResult) + Send + Sync>;

/// Runs the classifier behind a simulated inference delay.
pub struct AnalysisRunner {
    classifier: SymptomClassifier,
    delay: Duration,
    on_complete: Option<CompletionCallback>,
}

impl AnalysisRunner {
    /// A runner using `classifier` and the default two-second delay.
    pub fn new(classifier: SymptomClassifier) -> Self {
        Self {
            classifier,
            delay: DEFAULT_ANALYSIS_DELAY,
            on_complete: None,
        }
    }

    /// Replace the simulated latency.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Register the completion callback. A second call replaces the first.
    pub fn on_complete(mut self, callback: CompletionCallback) -> Self {
        self.on_complete = Some(callback);
        self
    }

    /// The configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait out the delay, then classify `text`.
    ///
    /// Blank text is rejected before any waiting, so a suppressed trigger
    /// costs nothing.
    pub async fn analyze(&self, text: &str) -> TriageOutcome<AnalysisResult> {
        if text.trim().is_empty() {
            return Err(TriageError::EmptySymptoms);
        }

        debug!(delay_ms = self.delay.as_millis() as u64, "analysis started");
        tokio::time::sleep(self.delay).await;

        let result = self.classifier.classify(text)?;
        info!(
            condition = %result.condition,
            urgency = %result.urgency,
            confidence = result.confidence,
            "analysis complete"
        );

        if let Some(callback) = &self.on_complete {
            callback(&result);
        }
        Ok(result)
    }
}

impl Default for AnalysisRunner {
    fn default() -> Self {
        Self::new(SymptomClassifier::new())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use triage_contracts::error::TriageError;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn analysis_waits_for_the_configured_delay() {
        let runner = AnalysisRunner::default().with_delay(Duration::from_millis(2000));
        let start = tokio::time::Instant::now();

        let result = runner.analyze("sore throat").await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(2000));
        assert_eq!(result.condition, "Respiratory Issues");
    }

    #[tokio::test(start_paused = true)]
    async fn blank_text_returns_immediately() {
        let runner = AnalysisRunner::default();
        let start = tokio::time::Instant::now();

        let err = runner.analyze("  ").await.unwrap_err();

        assert!(matches!(err, TriageError::EmptySymptoms));
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn callback_receives_the_returned_value() {
        let seen: Arc<Mutex<Vec<AnalysisResult>>> = Arc::new(Mutex::new(vec![]));
        let sink = Arc::clone(&seen);
        let runner = AnalysisRunner::default()
            .with_delay(Duration::from_millis(10))
            .on_complete(Box::new(move |r| sink.lock().unwrap().push(r.clone())));

        let result = runner.analyze("chills and fever").await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], result);
    }

    #[tokio::test(start_paused = true)]
    async fn callback_not_invoked_for_blank_text() {
        let calls = Arc::new(Mutex::new(0u32));
        let counter = Arc::clone(&calls);
        let runner = AnalysisRunner::default()
            .on_complete(Box::new(move |_| *counter.lock().unwrap() += 1));

        let _ = runner.analyze("").await;

        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_analyses_both_complete() {
        let runner = Arc::new(AnalysisRunner::default().with_delay(Duration::from_millis(50)));

        let a = tokio::spawn({
            let runner = Arc::clone(&runner);
            async move { runner.analyze("migraine").await }
        });
        let b = tokio::spawn({
            let runner = Arc::clone(&runner);
            async move { runner.analyze("nausea").await }
        });

        assert_eq!(a.await.unwrap().unwrap().condition, "Headache/Migraine");
        assert_eq!(b.await.unwrap().unwrap().condition, "Gastrointestinal Issues");
    }
}
