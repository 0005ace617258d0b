//! Job Posting Adapter Server
//!
//! Takes a public job-posting URL, looks the posting up on the hosted
//! job board's GraphQL API and returns a small fixed JSON object.

mod config;
mod error;
mod routes;
mod telemetry;

use anyhow::{Context, Result};
use config::Config;
use fetcher::JobBoardClient;
use routes::{AppState, build_app};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration first: it decides where logs go
    let config = Config::from_env().context("Failed to load configuration")?;
    telemetry::init(config.log_file.as_deref())?;

    tracing::info!("Starting job posting adapter");

    let client =
        JobBoardClient::new(config.upstream.clone()).context("Failed to create job board client")?;
    tracing::info!(
        endpoint = %client.config().endpoint,
        tenant = %client.config().tenant,
        timeout_secs = client.config().timeout.as_secs(),
        "Job board client ready"
    );

    let app = build_app(AppState::new(Arc::new(client)));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Server is running on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
