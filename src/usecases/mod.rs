//! Application use cases. Orchestrate domain logic via ports.

pub mod patient_risk_service;
pub mod risk_assessor;

pub use patient_risk_service::PatientRiskService;
pub use risk_assessor::RiskAssessor;
