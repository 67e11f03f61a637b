//! Map patient/note service payloads to domain entities.

use crate::domain::{ClinicalNote, DomainError, Gender, PatientSummary};
use chrono::NaiveDate;
use serde::Deserialize;

/// Patient as served by `GET /api/patients/{id}`. Unused fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDto {
    pub id: i64,
    pub date_of_birth: NaiveDate,
    #[serde(default)]
    pub gender: Option<String>,
}

/// Note as served by `GET /api/notes/patient/{id}`. Only the text is read.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDto {
    #[serde(default)]
    pub note: Option<String>,
}

/// Validate and convert a patient. Gender must be `M` or `F`.
pub fn patient_to_domain(dto: PatientDto) -> Result<PatientSummary, DomainError> {
    let code = dto.gender.unwrap_or_default();
    let gender: Gender = code
        .parse()
        .map_err(|e| DomainError::MalformedPatient(format!("patient {}: {}", dto.id, e)))?;
    Ok(PatientSummary {
        id: dto.id,
        date_of_birth: dto.date_of_birth,
        gender,
    })
}

/// Convert notes, dropping entries without text.
pub fn notes_to_domain(dtos: Vec<NoteDto>) -> Vec<ClinicalNote> {
    dtos.into_iter()
        .filter_map(|n| n.note)
        .map(ClinicalNote::new)
        .collect()
}
