//! HTTP adapters for the patient and note services. Implement outbound lookups.
//!
//! Transport failures and unexpected statuses map to the service's "unavailable"
//! DomainError variant, undecodable 2xx bodies to its "malformed" variant.
//! 404 and `null` bodies map to `Ok(None)`.

pub mod mapper;
pub mod note_client;
pub mod patient_client;

pub use note_client::HttpNoteClient;
pub use patient_client::HttpPatientClient;

use crate::domain::DomainError;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// How one upstream's failures surface as DomainError.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Upstream {
    pub name: &'static str,
    pub unavailable: fn(String) -> DomainError,
    pub malformed: fn(String) -> DomainError,
}

/// Connection settings shared by both upstream clients.
#[derive(Debug, Clone)]
pub struct UpstreamSettings {
    pub base_url: String,
    pub timeout: Duration,
    /// Basic auth (username, password) sent with every request when set.
    pub credentials: Option<(String, String)>,
}

impl UpstreamSettings {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
            credentials: None,
        }
    }

    pub fn with_credentials(mut self, username: String, password: String) -> Self {
        self.credentials = Some((username, password));
        self
    }

    fn client(&self) -> reqwest::Result<Client> {
        Client::builder().timeout(self.timeout).build()
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.credentials {
            Some((user, pass)) => req.basic_auth(user, Some(pass)),
            None => req,
        }
    }

    /// GET `{base_url}{path}` and decode the JSON body.
    ///
    /// 404 and empty/`null` bodies are `Ok(None)`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        client: &Client,
        path: &str,
        upstream: Upstream,
    ) -> Result<Option<T>, DomainError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, service = upstream.name, "upstream request");

        let res = self
            .authorize(client.get(&url))
            .send()
            .await
            .map_err(|e| (upstream.unavailable)(format!("Request failed: {}", e)))?;

        let status = res.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let text = res.text().await.unwrap_or_else(|_| "unknown".to_string());
            warn!(service = upstream.name, status = %status, "upstream returned error");
            return Err((upstream.unavailable)(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let body = res
            .text()
            .await
            .map_err(|e| (upstream.unavailable)(format!("Failed to read body: {}", e)))?;
        if is_null_body(&body) {
            return Ok(None);
        }
        serde_json::from_str(&body)
            .map(Some)
            .map_err(|e| (upstream.malformed)(format!("Failed to parse {}: {}", upstream.name, e)))
    }
}

/// Body text is empty or the literal `null`.
fn is_null_body(body: &str) -> bool {
    let t = body.trim();
    t.is_empty() || t == "null"
}
