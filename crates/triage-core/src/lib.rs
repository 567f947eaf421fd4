//! # triage-core
//!
//! The local half of the triage workspace.
//!
//! This crate provides:
//! - The trait seams (`ConfidenceSource`, `UrgencyEngine`, `Verifier`)
//! - The static condition catalog and the keyword `SymptomClassifier`
//! - `AnalysisRunner`, which wraps the classifier in a simulated inference delay
//! - `IntakeSession`, the busy flags and stale-result guard for front ends
//!
//! ## Usage
//!
//! ```rust,ignore
//! use triage_core::{AnalysisRunner, SymptomClassifier};
//!
//! let runner = AnalysisRunner::new(SymptomClassifier::new());
//! let result = runner.analyze("fever and chills").await?;
//! ```

pub mod analysis;
pub mod catalog;
pub mod classifier;
pub mod session;
pub mod traits;

pub use analysis::AnalysisRunner;
pub use classifier::SymptomClassifier;
pub use session::IntakeSession;
