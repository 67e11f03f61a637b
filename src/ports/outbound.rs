//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{ClinicalNote, DomainError, PatientSummary};
use chrono::NaiveDate;

/// Patient service gateway.
#[async_trait::async_trait]
pub trait PatientLookup: Send + Sync {
    /// Fetch a patient's demographics.
    ///
    /// - `Ok(None)`: the service has no such patient
    /// - `Err(DomainError::PatientService)`: the service could not be reached or failed
    /// - `Err(DomainError::MalformedPatient)`: the record has no usable birth date or gender
    async fn find_patient(&self, patient_id: i64) -> Result<Option<PatientSummary>, DomainError>;
}

/// Note service gateway.
#[async_trait::async_trait]
pub trait NoteLookup: Send + Sync {
    /// Fetch all notes of a patient. `Ok(None)` means the service reported "not found".
    async fn find_notes(&self, patient_id: i64) -> Result<Option<Vec<ClinicalNote>>, DomainError>;
}

/// Source of the current date, for age computation.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
