//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Patient with ID {0} not found")]
    PatientNotFound(i64),

    /// Patient service unreachable or answered with an unexpected status.
    #[error("Patient service error: {0}")]
    PatientService(String),

    /// Note service failure other than "not found".
    #[error("Note service error: {0}")]
    NoteService(String),

    /// Patient record came back but cannot be assessed (bad birth date or gender code).
    #[error("Malformed patient record: {0}")]
    MalformedPatient(String),

    /// Note service answered 2xx with a body that is not a note list.
    #[error("Malformed notes payload: {0}")]
    MalformedNotes(String),

    #[error("Risk term catalog error: {0}")]
    Catalog(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
