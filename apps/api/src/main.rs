mod config;
mod embedding;
mod errors;
mod kpi;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::embedding::OpenAiEmbedder;
use crate::kpi::scorer::LlmScorer;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting KPI API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM-backed scorer
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    let scorer = Arc::new(LlmScorer::new(llm));
    info!("Scorer initialized (model: {})", llm_client::MODEL);

    // Initialize embedder
    let embedder = Arc::new(OpenAiEmbedder::new(config.openai_api_key.clone()));
    info!(
        "Embedder initialized (model: {}, {} dims)",
        embedding::EMBEDDING_MODEL,
        embedding::EMBEDDING_DIMENSIONS
    );

    // Build app state
    let state = AppState { scorer, embedder };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
