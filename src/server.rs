//! HTTP server initialization and runtime setup.
//!
//! Loads reference data, wires the fact sources and runs the Axum server
//! until Ctrl-C.

use crate::application::services::{FactsService, ReferenceData};
use crate::config::Config;
use crate::domain::calendar::WeekdayNames;
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::reference::load_zodiac_table;
use crate::infrastructure::scraping::{FamousBirthdaysClient, HttpFetcher, MoonGiantClient};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the facts service described by `config`.
///
/// # Errors
///
/// Returns an error if the zodiac table cannot be loaded, the time zone is
/// unknown or the HTTP client cannot be built.
pub fn build_facts_service(config: &Config) -> Result<FactsService> {
    let zodiac = load_zodiac_table(&config.zodiac_table_path)
        .with_context(|| format!("Failed to load zodiac table {}", config.zodiac_table_path))?;
    tracing::info!(ranges = zodiac.len(), "Zodiac table loaded");

    let clock = SystemClock::new(config.time_zone()?);

    let http = HttpFetcher::new(config.fetch_timeout(), config.fetch_retries)
        .context("Failed to build HTTP client")?;
    let moon_phases = MoonGiantClient::new(http.clone(), &config.moon_phase_base_url);
    let notable_people = FamousBirthdaysClient::new(
        http,
        &config.notable_people_base_url,
        config.notable_people_limit,
    );

    Ok(FactsService::new(
        Arc::new(clock),
        Arc::new(moon_phases),
        Arc::new(notable_people),
        ReferenceData {
            weekday_names: WeekdayNames::default(),
            zodiac,
        },
        config.leap_day_policy,
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Reference data or the HTTP client cannot be initialized
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let facts_service = build_facts_service(&config)?;
    tracing::info!(today = %facts_service.today(), "Facts service ready");

    let state = AppState::new(Arc::new(facts_service), config.timezone.clone());

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
