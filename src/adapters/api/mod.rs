//! HTTP API. Drives the RiskQueryPort.
//!
//! - `GET /api/risk/patient/:id`: risk assessment as JSON
//! - `GET /health`: liveness

pub mod error;

pub use error::ApiError;

use crate::domain::RiskResult;
use crate::ports::RiskQueryPort;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the API router around a risk query implementation.
pub fn router(risk: Arc<dyn RiskQueryPort>) -> Router {
    Router::new()
        .route("/api/risk/patient/:id", get(patient_risk))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(risk)
}

async fn patient_risk(
    State(risk): State<Arc<dyn RiskQueryPort>>,
    Path(patient_id): Path<i64>,
) -> Result<Json<RiskResult>, ApiError> {
    let result = risk.assess_patient(patient_id).await?;
    Ok(Json(result))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "UP" }))
}
