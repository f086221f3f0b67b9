mod accounts;
mod company;
mod config;
mod db;
mod errors;
mod generation;
mod llm_client;
mod mock_interview;
mod models;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::http::{HeaderValue, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::company::HttpCompanyDataSource;
use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::mock_interview::relay::RealtimeRelay;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobPrep API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize LLM client
    let llm = LlmClient::new(config.openai_api_key.clone(), config.openai_base_url.clone())?;
    info!(
        "LLM client initialized (models: {}, {})",
        llm_client::REASONING_MODEL,
        llm_client::GENERAL_MODEL
    );

    // Initialize company search/format collaborator
    let company = HttpCompanyDataSource::new(config.company_service_url.clone())?;
    info!("Company service: {}", config.company_service_url);

    // Initialize realtime relay for mock interviews
    let relay = RealtimeRelay::new(config.openai_api_key.clone(), config.openai_base_url.clone())?;

    // Build app state
    let state = AppState {
        db,
        llm: Arc::new(llm),
        company: Arc::new(company),
        relay,
    };

    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.parse::<HeaderValue>()?)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
