//! Route table and handlers.
//!
//! All routes live under `/api/triage`:
//!
//! | method | path        | handler         |
//! |--------|-------------|-----------------|
//! | POST   | `/assess`   | `assess`        |
//! | GET    | `/resources`| `list_resources`|
//! | GET    | `/health`   | `health`        |

use std::{sync::Arc, time::Duration};

use axum::{
    body::Bytes,
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{Number, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use triage_contracts::{
    assessment::{HealthStatus, ResourceListing, TriageResult},
    urgency::Urgency,
};
use triage_core::traits::UrgencyEngine;

use crate::{error::ApiError, resources::nearby_resources};

pub const DISCLAIMER: &str = "This assessment is for informational purposes only and is not a substitute for professional medical advice.";
pub const SERVICE_NAME: &str = "TRIAGE A.I. Backend";

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<dyn UrgencyEngine>,
    pub processing_delay: Duration,
}

impl AppState {
    pub fn new(engine: Arc<dyn UrgencyEngine>, processing_delay: Duration) -> Self {
        Self {
            engine,
            processing_delay,
        }
    }
}

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/assess", post(assess))
        .route("/resources", get(list_resources))
        .route("/health", get(health));

    Router::new()
        .nest("/api/triage", api)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn unix_seconds() -> f64 {
    chrono::Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

/// Pull `symptoms` and `location` out of a raw request body.
///
/// Anything that is not a JSON object with a string `symptoms` is
/// `SymptomsRequired`; whitespace-only symptoms are `EmptySymptoms`.
fn parse_submission(body: &[u8]) -> Result<(String, String), ApiError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ApiError::SymptomsRequired)?;
    let symptoms = value
        .get("symptoms")
        .and_then(Value::as_str)
        .ok_or(ApiError::SymptomsRequired)?
        .trim();
    if symptoms.is_empty() {
        return Err(ApiError::EmptySymptoms);
    }
    let location = value
        .get("location")
        .and_then(Value::as_str)
        .unwrap_or_default();
    Ok((symptoms.to_string(), location.to_string()))
}

async fn assess(State(state): State<AppState>, body: Bytes) -> Result<Json<TriageResult>, ApiError> {
    let (symptoms, location) = parse_submission(&body)?;

    tokio::time::sleep(state.processing_delay).await;

    let verdict = state
        .engine
        .evaluate(&symptoms)
        .map_err(|e| ApiError::Assessment(e.to_string()))?;
    let nearby = nearby_resources(&location, Some(verdict.urgency_level));

    info!(
        urgency = %verdict.urgency_level,
        resources = nearby.len(),
        "triage assessment complete"
    );

    Ok(Json(TriageResult {
        urgency_level: verdict.urgency_level,
        summary: verdict.summary,
        recommendations: verdict.recommendations,
        nearby_resources: nearby,
        reasoning: Some(verdict.reasoning),
        timestamp: Number::from_f64(unix_seconds()),
        disclaimer: Some(DISCLAIMER.to_string()),
        extra: Default::default(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct ResourceQuery {
    #[serde(default)]
    pub location: String,
    pub urgency: Option<String>,
}

async fn list_resources(Query(query): Query<ResourceQuery>) -> Json<ResourceListing> {
    // Unknown labels list every facility kind.
    let urgency = query
        .urgency
        .as_deref()
        .unwrap_or(Urgency::Moderate.as_str())
        .parse::<Urgency>()
        .ok();
    let resources = nearby_resources(&query.location, urgency);
    Json(ResourceListing {
        total: resources.len(),
        resources,
    })
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: unix_seconds(),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
