use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::llm_client::{API_VERSION, FALLBACK_MODEL, MODEL};
use crate::state::AppState;

/// GET /health
/// Returns service status, model identifiers, and whether an API key is
/// configured. Does not probe the upstream API.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "hiring-agent-api",
        "version": env!("CARGO_PKG_VERSION"),
        "model_in_use": MODEL,
        "fallback_model": FALLBACK_MODEL,
        "api_version": API_VERSION,
        "api_key_configured": state.config.google_api_key.is_some(),
    }))
}
