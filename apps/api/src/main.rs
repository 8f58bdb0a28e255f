mod analysis;
mod config;
mod errors;
mod extract;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (errors on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Hiring Agent API v{}", env!("CARGO_PKG_VERSION"));

    match &config.google_api_key {
        Some(key) => info!("API key found: {}***", mask_key(key)),
        None => warn!(
            "No GOOGLE_API_KEY or GEMINI_API_KEY set — /analyze will return an error payload"
        ),
    }

    // Initialize LLM client
    let llm = GeminiClient::new(config.google_api_key.clone());
    info!(
        "LLM client initialized (model: {}, fallback: {})",
        llm_client::MODEL,
        llm_client::FALLBACK_MODEL
    );

    // Build app state
    let state = AppState {
        llm,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // the dashboard runs on a separate origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// First six characters of the key, for startup logging only.
fn mask_key(key: &str) -> &str {
    key.get(..6).unwrap_or("invalid")
}
