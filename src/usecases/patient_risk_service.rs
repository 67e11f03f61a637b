//! Patient risk use case: patient lookup -> notes lookup -> assessment.
//!
//! - Patient missing: `PatientNotFound`, the assessor is not called
//! - Notes "not found": treated as an empty note set
//! - Either service failing: surfaced as-is, the assessor is not called

use crate::domain::{DomainError, RiskResult};
use crate::ports::{NoteLookup, PatientLookup, RiskQueryPort};
use crate::usecases::risk_assessor::RiskAssessor;
use std::sync::Arc;
use tracing::{info, warn};

pub struct PatientRiskService {
    patients: Arc<dyn PatientLookup>,
    notes: Arc<dyn NoteLookup>,
    assessor: Arc<RiskAssessor>,
}

impl PatientRiskService {
    pub fn new(
        patients: Arc<dyn PatientLookup>,
        notes: Arc<dyn NoteLookup>,
        assessor: Arc<RiskAssessor>,
    ) -> Self {
        Self {
            patients,
            notes,
            assessor,
        }
    }
}

#[async_trait::async_trait]
impl RiskQueryPort for PatientRiskService {
    async fn assess_patient(&self, patient_id: i64) -> Result<RiskResult, DomainError> {
        let patient = match self.patients.find_patient(patient_id).await {
            Ok(Some(p)) => p,
            Ok(None) => {
                info!(patient_id, "patient not found");
                return Err(DomainError::PatientNotFound(patient_id));
            }
            Err(e) => {
                warn!(patient_id, error = %e, "patient lookup failed");
                return Err(e);
            }
        };

        let notes = match self.notes.find_notes(patient_id).await {
            Ok(Some(notes)) => notes,
            Ok(None) => {
                info!(patient_id, "no notes found; assessing with an empty note set");
                Vec::new()
            }
            Err(e) => {
                warn!(patient_id, error = %e, "notes lookup failed");
                return Err(e);
            }
        };

        let result = self.assessor.assess(&patient, &notes);
        info!(
            patient_id,
            notes = notes.len(),
            age = result.age,
            risk_level = %result.risk_level,
            "risk assessed"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use crate::domain::{
        ClinicalNote, Gender, PatientSummary, RiskLevel, RiskTermCatalog, RiskTermMatcher,
    };
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum PatientReply {
        Found,
        Missing,
        Down,
    }

    struct FakePatients(PatientReply);

    #[async_trait::async_trait]
    impl PatientLookup for FakePatients {
        async fn find_patient(&self, id: i64) -> Result<Option<PatientSummary>, DomainError> {
            match self.0 {
                PatientReply::Found => Ok(Some(PatientSummary {
                    id,
                    date_of_birth: NaiveDate::from_ymd_opt(1980, 5, 10).unwrap(),
                    gender: Gender::Male,
                })),
                PatientReply::Missing => Ok(None),
                PatientReply::Down => Err(DomainError::PatientService("connection refused".into())),
            }
        }
    }

    enum NoteReply {
        Notes(Vec<&'static str>),
        Missing,
        Down,
    }

    struct FakeNotes {
        reply: NoteReply,
        calls: AtomicUsize,
    }

    impl FakeNotes {
        fn new(reply: NoteReply) -> Arc<Self> {
            Arc::new(Self {
                reply,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait::async_trait]
    impl NoteLookup for FakeNotes {
        async fn find_notes(&self, _id: i64) -> Result<Option<Vec<ClinicalNote>>, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                NoteReply::Notes(texts) => {
                    Ok(Some(texts.iter().map(|t| ClinicalNote::new(*t)).collect()))
                }
                NoteReply::Missing => Ok(None),
                NoteReply::Down => Err(DomainError::NoteService("HTTP 500".into())),
            }
        }
    }

    fn service(patients: PatientReply, notes: Arc<FakeNotes>) -> PatientRiskService {
        let catalog = Arc::new(RiskTermCatalog::reference().unwrap());
        let clock = Arc::new(FixedClock::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
        let assessor = Arc::new(RiskAssessor::new(RiskTermMatcher::new(catalog), clock));
        PatientRiskService::new(Arc::new(FakePatients(patients)), notes, assessor)
    }

    #[tokio::test]
    async fn test_success() {
        let notes = FakeNotes::new(NoteReply::Notes(vec!["Poids anormal", "Cholestérol élevé"]));
        let result = service(PatientReply::Found, notes)
            .assess_patient(1)
            .await
            .unwrap();
        assert_eq!(
            result,
            RiskResult {
                patient_id: 1,
                age: 44,
                risk_level: RiskLevel::Borderline
            }
        );
    }

    #[tokio::test]
    async fn test_patient_not_found_skips_notes() {
        let notes = FakeNotes::new(NoteReply::Notes(vec!["poids"]));
        let err = service(PatientReply::Missing, notes.clone())
            .assess_patient(7)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::PatientNotFound(7)));
        assert_eq!(notes.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_patient_service_error_is_not_not_found() {
        let notes = FakeNotes::new(NoteReply::Missing);
        let err = service(PatientReply::Down, notes.clone())
            .assess_patient(1)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::PatientService(_)));
        assert_eq!(notes.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_notes_not_found_means_empty() {
        let notes = FakeNotes::new(NoteReply::Missing);
        let result = service(PatientReply::Found, notes)
            .assess_patient(1)
            .await
            .unwrap();
        assert_eq!(result.risk_level, RiskLevel::None);
        assert_eq!(result.age, 44);
    }

    #[tokio::test]
    async fn test_notes_service_error() {
        let notes = FakeNotes::new(NoteReply::Down);
        let err = service(PatientReply::Found, notes)
            .assess_patient(1)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NoteService(_)));
    }
}
