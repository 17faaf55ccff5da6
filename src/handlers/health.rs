use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::state::AppState;

// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let provider_configured = state.config.provider.missing_fields().is_empty();
    Json(serde_json::json!({
        "status": "ok",
        "provider_configured": provider_configured,
    }))
}
