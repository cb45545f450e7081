use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use catering_rules::api::{build_router, AppState};
use catering_rules::config::AppConfig;
use catering_rules::engine::BusinessRulesEngine;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("Starting catering rules API");

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let config = AppConfig::from_env();
    let addr = config.bind_addr();

    // Build the engine with any configured standards overrides
    let engine = BusinessRulesEngine::with_standards(config.standards);
    let state = AppState::new(engine);
    let app = build_router(state);

    info!("Listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
