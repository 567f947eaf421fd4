//! # triage-rules
//!
//! A TOML-driven keyword urgency engine for the triage service.
//!
//! ## Overview
//!
//! This crate provides [`TomlUrgencyEngine`], which implements the
//! [`UrgencyEngine`](triage_core::traits::UrgencyEngine) trait. Rules are
//! declared in a TOML file, evaluated in order, and the first matching rule
//! wins. If no rule matches, the configured default outcome (low urgency in
//! the shipped rule set) is returned.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use triage_rules::TomlUrgencyEngine;
//!
//! let engine = TomlUrgencyEngine::builtin()?;
//! let verdict = engine.evaluate("crushing chest pain")?;
//! ```

pub mod engine;
pub mod rule;

pub use engine::{TomlUrgencyEngine, BUILTIN_RULES};
pub use rule::{DefaultOutcome, RulesConfig, UrgencyRule};

// ── Tests ─────────────────────────────────────────────────────────────────────
