//! Core domain layer. No external I/O dependencies.
//!
//! Entities and the risk rules live here. Dependencies flow inward.

pub mod catalog;
pub mod classifier;
pub mod entities;
pub mod errors;
pub mod matcher;
pub mod normalize;

pub use catalog::RiskTermCatalog;
pub use classifier::{age_on, classify};
pub use entities::{ClinicalNote, Gender, InvalidGender, PatientSummary, RiskLevel, RiskResult};
pub use errors::DomainError;
pub use matcher::RiskTermMatcher;
pub use normalize::normalize;
