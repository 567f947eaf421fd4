//! Error types for the triage workspace.
//!
//! Fallible operations return `TriageOutcome<T>`. Variants carry enough
//! context to produce an actionable operator log line.

use thiserror::Error;

/// The unified error type for the triage crates.
#[derive(Debug, Error)]
pub enum TriageError {
    /// The symptom text was empty or whitespace only.
    #[error("symptom text is empty")]
    EmptySymptoms,

    /// The request never produced an HTTP response (connect, DNS, body read).
    #[error("transport failure: {reason}")]
    Transport { reason: String },

    /// The triage endpoint answered with a non-success status.
    #[error("triage endpoint returned status {status}")]
    UpstreamStatus { status: u16 },

    /// The response body could not be decoded into the expected shape.
    #[error("invalid triage response: {reason}")]
    InvalidResponse { reason: String },

    /// The verifier rejected the response body at the boundary.
    #[error("response verification failed: {reason}")]
    VerificationFailed { reason: String },

    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A JSON Schema document could not be compiled or applied.
    #[error("schema validation error: {reason}")]
    SchemaValidation { reason: String },

    /// An urgency label outside `low | moderate | high`.
    #[error("unknown urgency level '{value}'")]
    UnknownUrgency { value: String },
}

/// Convenience alias used throughout the triage crates.
pub type TriageOutcome<T> = Result<T, TriageError>;
