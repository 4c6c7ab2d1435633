//! Scorecard server binary.

use scorecard::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting scorecard server...");

    let config = AppConfig::new().host("0.0.0.0").port(8000);

    let template = Arc::new(TeraTemplateRender::new(&config.template_glob)?);
    let exporter = Arc::new(ChromiumPdfExporter::launch().await?);
    let controller = Arc::new(ExportScorecardController::new(template, exporter));

    tracing::info!("Try: curl http://localhost:8000/");
    tracing::info!(
        "Try: curl -X POST -H 'Content-Type: application/json' \
         -d '{{\"students\": [{{\"name\": \"User1\", \"score1\": 1.0, \"score2\": 2.0, \
         \"score3\": 3.0, \"mean\": 2.0}}]}}' http://localhost:8000/scorecard.pdf -o scorecard.pdf"
    );

    Server::new(config, controller).run().await
}
