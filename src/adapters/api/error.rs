//! API error type with structured JSON responses.

use crate::domain::DomainError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// Wraps DomainError for the HTTP boundary.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self.0 {
            DomainError::PatientNotFound(_) => {
                (StatusCode::NOT_FOUND, "PATIENT_NOT_FOUND", self.0.to_string())
            }
            DomainError::PatientService(_) | DomainError::NoteService(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "UPSTREAM_UNAVAILABLE",
                self.0.to_string(),
            ),
            DomainError::MalformedPatient(_) | DomainError::MalformedNotes(_) => {
                (StatusCode::BAD_GATEWAY, "UPSTREAM_INVALID", self.0.to_string())
            }
            DomainError::Catalog(_) | DomainError::Config(_) => {
                tracing::error!(error = %self.0, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };
        (status, Json(body)).into_response()
    }
}
