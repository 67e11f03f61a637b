//! Wiring & DI. Entry point: load config, compile the catalog, build adapters, serve HTTP.
//! No business logic here.

use dotenv::dotenv;
use risk_service::adapters::api;
use risk_service::adapters::clock::SystemClock;
use risk_service::adapters::http::{HttpNoteClient, HttpPatientClient, UpstreamSettings};
use risk_service::domain::{RiskTermCatalog, RiskTermMatcher};
use risk_service::ports::{Clock, NoteLookup, PatientLookup, RiskQueryPort};
use risk_service::shared::AppConfig;
use risk_service::usecases::{PatientRiskService, RiskAssessor};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cfg = AppConfig::load().map_err(|e| anyhow::anyhow!("config: {}", e))?;

    // --- Catalog: compiled once, shared read-only by every request ---
    let catalog = match cfg.catalog_path.as_deref() {
        Some(path) => {
            info!(path, "loading risk term catalog from file");
            RiskTermCatalog::from_json_file(path)?
        }
        None => RiskTermCatalog::reference()?,
    };
    info!(terms = catalog.len(), "risk term catalog ready");
    let matcher = RiskTermMatcher::new(Arc::new(catalog));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let assessor = Arc::new(RiskAssessor::new(matcher, clock));

    // --- Upstream clients ---
    let timeout = Duration::from_millis(cfg.upstream_timeout_ms_or_default());
    let upstream = |base_url: String| {
        let settings = UpstreamSettings::new(base_url, timeout);
        match cfg.upstream_credentials() {
            Some((user, pass)) => settings.with_credentials(user, pass),
            None => settings,
        }
    };
    let patient_url = cfg.patient_service_url_or_default();
    let note_url = cfg.note_service_url_or_default();
    info!(
        patient_service = %patient_url,
        note_service = %note_url,
        timeout_ms = timeout.as_millis() as u64,
        basic_auth = cfg.upstream_credentials().is_some(),
        "upstream services"
    );
    let patients: Arc<dyn PatientLookup> = Arc::new(HttpPatientClient::new(upstream(patient_url))?);
    let notes: Arc<dyn NoteLookup> = Arc::new(HttpNoteClient::new(upstream(note_url))?);

    // --- Service + HTTP API ---
    let risk: Arc<dyn RiskQueryPort> = Arc::new(PatientRiskService::new(patients, notes, assessor));
    let app = api::router(risk);

    let bind_addr = cfg.bind_addr_or_default();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("bind {}: {}", bind_addr, e))?;
    info!(addr = %bind_addr, "risk service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("risk service stopped");
    Ok(())
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
