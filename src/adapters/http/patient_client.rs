//! Patient service client. Implements PatientLookup via `GET /api/patients/{id}`.

use super::mapper::{patient_to_domain, PatientDto};
use super::{Upstream, UpstreamSettings};
use crate::domain::{DomainError, PatientSummary};
use crate::ports::PatientLookup;
use reqwest::Client;

const PATIENT_SERVICE: Upstream = Upstream {
    name: "patient",
    unavailable: DomainError::PatientService,
    malformed: DomainError::MalformedPatient,
};

pub struct HttpPatientClient {
    client: Client,
    settings: UpstreamSettings,
}

impl HttpPatientClient {
    pub fn new(settings: UpstreamSettings) -> Result<Self, DomainError> {
        let client = settings
            .client()
            .map_err(|e| DomainError::Config(format!("patient client: {}", e)))?;
        Ok(Self { client, settings })
    }
}

#[async_trait::async_trait]
impl PatientLookup for HttpPatientClient {
    async fn find_patient(&self, patient_id: i64) -> Result<Option<PatientSummary>, DomainError> {
        let path = format!("/api/patients/{}", patient_id);
        let dto: Option<PatientDto> = self
            .settings
            .get_json(&self.client, &path, PATIENT_SERVICE)
            .await?;
        dto.map(patient_to_domain).transpose()
    }
}
