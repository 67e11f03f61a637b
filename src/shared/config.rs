//! Application configuration. Listen address, upstream services, catalog.

use serde::Deserialize;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8083";
pub const DEFAULT_PATIENT_SERVICE_URL: &str = "http://localhost:8081";
pub const DEFAULT_NOTE_SERVICE_URL: &str = "http://localhost:8082";
pub const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 5000;

/// Read from `RISK_SERVICE_*` env vars, plus an optional file named by `RISK_SERVICE_CONFIG`.
#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Socket address the HTTP API listens on. RISK_SERVICE_BIND_ADDR.
    #[serde(default)]
    pub bind_addr: Option<String>,

    /// Base URL of the patient service. RISK_SERVICE_PATIENT_SERVICE_URL.
    #[serde(default)]
    pub patient_service_url: Option<String>,

    /// Base URL of the note service. RISK_SERVICE_NOTE_SERVICE_URL.
    #[serde(default)]
    pub note_service_url: Option<String>,

    /// Basic auth credentials sent to both upstream services.
    #[serde(default)]
    pub upstream_username: Option<String>,
    #[serde(default)]
    pub upstream_password: Option<String>,

    /// Per-request timeout for upstream calls, in ms.
    #[serde(default)]
    pub upstream_timeout_ms: Option<u64>,

    /// JSON file overriding the reference risk term catalog.
    #[serde(default)]
    pub catalog_path: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("RISK_SERVICE_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("RISK_SERVICE"));
        c.build()?.try_deserialize()
    }

    pub fn bind_addr_or_default(&self) -> String {
        self.bind_addr
            .clone()
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
    }

    pub fn patient_service_url_or_default(&self) -> String {
        self.patient_service_url
            .clone()
            .unwrap_or_else(|| DEFAULT_PATIENT_SERVICE_URL.to_string())
    }

    pub fn note_service_url_or_default(&self) -> String {
        self.note_service_url
            .clone()
            .unwrap_or_else(|| DEFAULT_NOTE_SERVICE_URL.to_string())
    }

    pub fn upstream_timeout_ms_or_default(&self) -> u64 {
        self.upstream_timeout_ms
            .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_MS)
    }

    /// Both username and password, or nothing.
    pub fn upstream_credentials(&self) -> Option<(String, String)> {
        match (&self.upstream_username, &self.upstream_password) {
            (Some(user), Some(pass)) => Some((user.clone(), pass.clone())),
            _ => None,
        }
    }
}
