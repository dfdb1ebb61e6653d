use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use dropout_catcher::application::services::AnalysisService;
use dropout_catcher::infrastructure::llm::LlmClientFactory;
use dropout_catcher::infrastructure::observability::{TracingConfig, init_tracing};
use dropout_catcher::infrastructure::text_processing::CompositeFileLoader;
use dropout_catcher::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(
        &TracingConfig::from_settings(environment.as_str(), &settings.logging),
        settings.server.port,
    );

    let file_loader = Arc::new(CompositeFileLoader::with_default_adapters(
        Duration::from_secs(settings.extraction.timeout_secs),
        &settings.extraction.tesseract_command,
        &settings.extraction.ocr_language,
    ));
    let llm_client = LlmClientFactory::create(&settings.llm)?;

    let analysis_service = Arc::new(AnalysisService::new(
        file_loader,
        llm_client,
        settings.extraction.max_chars,
    ));

    let state = AppState {
        analysis_service,
        max_body_bytes: settings.server.max_body_bytes,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server.host / server.port")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
