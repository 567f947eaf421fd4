//! The triage request handler.

use tracing::{debug, info, warn};

use triage_contracts::{
    assessment::{HealthStatus, ResourceListing, SubmissionId, TriageRequest, TriageResult},
    error::{TriageError, TriageOutcome},
};
use triage_core::traits::Verifier;
use triage_verify::{accept_triage_response, SchemaVerifier};

use crate::{config::ClientConfig, fallback::fallback_assessment};

/// Talks to a triage service over HTTP.
///
/// A single attempt is made per call; there is no retry.
pub struct TriageClient {
    http: reqwest::Client,
    config: ClientConfig,
    verifier: Box<dyn Verifier>,
}

impl TriageClient {
    /// Build a client for `config`.
    ///
    /// Fails with `ConfigError` when the base URL is not an http(s) URL or
    /// the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> TriageOutcome<Self> {
        let parsed = reqwest::Url::parse(&config.base_url).map_err(|e| TriageError::ConfigError {
            reason: format!("invalid triage base URL '{}': {}", config.base_url, e),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(TriageError::ConfigError {
                reason: format!(
                    "triage base URL must use http or https, got: {}",
                    parsed.scheme()
                ),
            });
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| TriageError::ConfigError {
            reason: format!("failed to create HTTP client: {}", e),
        })?;

        debug!(endpoint = %config.assess_url(), "triage client created");

        Ok(Self {
            http,
            config,
            verifier: Box::new(SchemaVerifier::for_triage_responses()),
        })
    }

    /// Replace the response verifier.
    pub fn with_verifier(mut self, verifier: Box<dyn Verifier>) -> Self {
        self.verifier = verifier;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Submit `symptoms` and return the service's assessment.
    ///
    /// Any failure is logged and replaced by the fixed fallback assessment.
    pub async fn submit_triage(&self, symptoms: &str, location: &str) -> TriageResult {
        let id = SubmissionId::new();
        match self.try_submit_with_id(id, symptoms, location).await {
            Ok(result) => result,
            Err(e) => {
                warn!(submission = %id.0, error = %e, "triage request failed; using fallback");
                fallback_assessment()
            }
        }
    }

    /// Like `submit_triage` but surfaces the failure instead of substituting.
    pub async fn try_submit(&self, symptoms: &str, location: &str) -> TriageOutcome<TriageResult> {
        self.try_submit_with_id(SubmissionId::new(), symptoms, location)
            .await
    }

    async fn try_submit_with_id(
        &self,
        id: SubmissionId,
        symptoms: &str,
        location: &str,
    ) -> TriageOutcome<TriageResult> {
        let url = self.config.assess_url();
        info!(submission = %id.0, %url, "submitting triage request");

        let request = TriageRequest {
            symptoms: symptoms.to_string(),
            location: location.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TriageError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value =
            response
                .json()
                .await
                .map_err(|e| TriageError::InvalidResponse {
                    reason: format!("response body is not JSON: {}", e),
                })?;

        let result = accept_triage_response(self.verifier.as_ref(), body)?;
        debug!(submission = %id.0, urgency = %result.urgency_level, "triage response accepted");
        Ok(result)
    }

    /// Query the service health route.
    pub async fn health(&self) -> TriageOutcome<HealthStatus> {
        let url = self.config.sibling_url("health");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;
        decode(response).await
    }

    /// List nearby resources appropriate for the urgency `label`.
    ///
    /// The label is sent as given; the service lists every facility kind
    /// for labels it does not recognise.
    pub async fn resources(&self, label: &str, location: &str) -> TriageOutcome<ResourceListing> {
        let url = self.config.sibling_url("resources");
        let query = [("location", location), ("urgency", label)];

        let response = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;
        decode(response).await
    }
}

fn transport_error(url: &str, e: reqwest::Error) -> TriageError {
    let reason = if e.is_timeout() {
        format!("request to {} timed out", url)
    } else if e.is_connect() {
        format!("failed to connect to {}: {}", url, e)
    } else {
        e.to_string()
    };
    TriageError::Transport { reason }
}

async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> TriageOutcome<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(TriageError::UpstreamStatus {
            status: status.as_u16(),
        });
    }
    response
        .json()
        .await
        .map_err(|e| TriageError::InvalidResponse {
            reason: e.to_string(),
        })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
