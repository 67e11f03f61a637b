//! Note service client. Implements NoteLookup via `GET /api/notes/patient/{id}`.

use super::mapper::{notes_to_domain, NoteDto};
use super::{Upstream, UpstreamSettings};
use crate::domain::{ClinicalNote, DomainError};
use crate::ports::NoteLookup;
use reqwest::Client;

const NOTE_SERVICE: Upstream = Upstream {
    name: "notes",
    unavailable: DomainError::NoteService,
    malformed: DomainError::MalformedNotes,
};

pub struct HttpNoteClient {
    client: Client,
    settings: UpstreamSettings,
}

impl HttpNoteClient {
    pub fn new(settings: UpstreamSettings) -> Result<Self, DomainError> {
        let client = settings
            .client()
            .map_err(|e| DomainError::Config(format!("note client: {}", e)))?;
        Ok(Self { client, settings })
    }
}

#[async_trait::async_trait]
impl NoteLookup for HttpNoteClient {
    async fn find_notes(&self, patient_id: i64) -> Result<Option<Vec<ClinicalNote>>, DomainError> {
        let path = format!("/api/notes/patient/{}", patient_id);
        let dtos: Option<Vec<NoteDto>> = self
            .settings
            .get_json(&self.client, &path, NOTE_SERVICE)
            .await?;
        Ok(dtos.map(notes_to_domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::test_support::spawn_upstream;
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;
    use std::time::Duration;

    async fn notes_route(Path(id): Path<i64>) -> (StatusCode, &'static str) {
        match id {
            1 => (
                StatusCode::OK,
                r#"[{"id":"n1","patId":1,"note":"Poids anormal"},{"id":"n2","patId":1,"note":"Vertiges"}]"#,
            ),
            2 => (StatusCode::OK, "[]"),
            3 => (StatusCode::OK, "null"),
            4 => (StatusCode::BAD_GATEWAY, "upstream down"),
            5 => (StatusCode::OK, "{not json"),
            6 => (StatusCode::OK, r#"{"note":"not a list"}"#),
            _ => (StatusCode::NOT_FOUND, ""),
        }
    }

    async fn client() -> HttpNoteClient {
        let base =
            spawn_upstream(Router::new().route("/api/notes/patient/:id", get(notes_route))).await;
        HttpNoteClient::new(UpstreamSettings::new(format!("{}/", base), Duration::from_secs(5)))
            .unwrap()
    }

    #[tokio::test]
    async fn test_notes_found() {
        let notes = client().await.find_notes(1).await.unwrap().unwrap();
        assert_eq!(
            notes,
            vec![ClinicalNote::new("Poids anormal"), ClinicalNote::new("Vertiges")]
        );
    }

    #[tokio::test]
    async fn test_empty_list_is_some_empty() {
        assert_eq!(client().await.find_notes(2).await.unwrap(), Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_not_found_and_null_are_none() {
        let c = client().await;
        assert_eq!(c.find_notes(3).await.unwrap(), None);
        assert_eq!(c.find_notes(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_error_status_is_note_service_error() {
        let c = client().await;
        assert!(matches!(c.find_notes(4).await, Err(DomainError::NoteService(_))));
    }

    #[tokio::test]
    async fn test_undecodable_body_is_malformed() {
        let c = client().await;
        assert!(matches!(c.find_notes(5).await, Err(DomainError::MalformedNotes(_))));
        assert!(matches!(c.find_notes(6).await, Err(DomainError::MalformedNotes(_))));
    }
}
