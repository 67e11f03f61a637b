//! Risk assessment of one patient from already-fetched data.
//!
//! No I/O: age comes from the injected clock, the rest from the matcher and
//! the classifier.

use crate::domain::{age_on, classify, ClinicalNote, PatientSummary, RiskResult, RiskTermMatcher};
use crate::ports::Clock;
use std::sync::Arc;
use tracing::debug;

pub struct RiskAssessor {
    matcher: RiskTermMatcher,
    clock: Arc<dyn Clock>,
}

impl RiskAssessor {
    pub fn new(matcher: RiskTermMatcher, clock: Arc<dyn Clock>) -> Self {
        Self { matcher, clock }
    }

    /// Assess a validated patient against their notes. Never fails.
    pub fn assess(&self, patient: &PatientSummary, notes: &[ClinicalNote]) -> RiskResult {
        let age = age_on(patient.date_of_birth, self.clock.today());
        let term_count = self.matcher.count_matched_terms(notes);
        let risk_level = classify(age, patient.gender, term_count);
        debug!(
            patient_id = patient.id,
            age,
            gender = patient.gender.code(),
            term_count,
            risk_level = %risk_level,
            "patient assessed"
        );
        RiskResult {
            patient_id: patient.id,
            age,
            risk_level,
        }
    }
}
