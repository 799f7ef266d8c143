use dotenvy::dotenv;
use report_frontend::config::get_configuration;
use report_frontend::services::submission_client::SubmissionClient;
use report_frontend::startup::build_router;
use report_frontend::utils::telemetry::init_tracing;
use report_frontend::AppState;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "report-frontend",
        &configuration.telemetry.log_level,
        &configuration.telemetry.otlp_endpoint,
    );

    report_frontend::services::metrics::init_metrics();

    let submission_client = Arc::new(SubmissionClient::new(configuration.backend.clone()));
    let app = build_router(AppState::new(submission_client, configuration.app.clone()));

    let address = format!(
        "{}:{}",
        configuration.server.host, configuration.server.port
    );
    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
        anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
    })?;

    info!("Starting report-frontend on {}", address);
    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
