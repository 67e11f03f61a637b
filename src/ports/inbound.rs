//! Inbound port. The HTTP API (adapter) calls into the application.

use crate::domain::{DomainError, RiskResult};

/// Risk assessment for a patient known to the patient service.
#[async_trait::async_trait]
pub trait RiskQueryPort: Send + Sync {
    /// Look up the patient and their notes, then assess.
    ///
    /// Errors: `PatientNotFound`, `PatientService`, `NoteService`,
    /// `MalformedPatient`, `MalformedNotes`.
    async fn assess_patient(&self, patient_id: i64) -> Result<RiskResult, DomainError>;
}
