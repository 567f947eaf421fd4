//! # triage-verify
//!
//! Response verification for triage clients.
//!
//! This crate provides [`engine::SchemaVerifier`], which implements the
//! [`triage_core::traits::Verifier`] trait. It checks untrusted response
//! bodies in two phases:
//!
//! 1. **Structural**: JSON Schema validation via the `jsonschema` crate.
//! 2. **Semantic**: domain rules (`RequiredField`, `AllowedValues`,
//!    `Custom`) evaluated against the body.
//!
//! [`schemas::triage_response_schema`] describes a well-formed triage
//! response, and [`schemas::accept_triage_response`] runs it and decodes the
//! body in one step.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use triage_verify::{engine::SchemaVerifier, schemas};
//!
//! let verifier = SchemaVerifier::for_triage_responses();
//! let result = schemas::accept_triage_response(&verifier, body)?;
//! ```

pub mod engine;
pub mod schemas;

pub use engine::SchemaVerifier;
pub use schemas::{accept_triage_response, triage_response_schema};
