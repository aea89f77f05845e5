mod config;
mod errors;
mod export;
mod extraction;
mod llm_client;
mod models;
mod render;
mod rewrite;
mod routes;
mod session;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::LlmFieldExtractor;
use crate::llm_client::LlmClient;
use crate::rewrite::LlmRewriter;
use crate::routes::build_router;
use crate::session::SessionStore;
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

    info!("Starting Vitae API v{}", env!("CARGO_PKG_VERSION"));

    // Shared LLM client behind the extraction and rewrite collaborator seams
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    let extractor = Arc::new(LlmFieldExtractor::new(llm.clone()));
    let rewriter = Arc::new(LlmRewriter::new(llm));
    info!("LLM collaborators initialized (model: {})", llm_client::MODEL);

    // In-memory session store — résumé data lives for the session only
    let sessions = SessionStore::new();

    let state = AppState {
        sessions,
        extractor,
        rewriter,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
