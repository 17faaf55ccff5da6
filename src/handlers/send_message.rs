use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use crate::errors::DispatchError;
use crate::models::DispatchRequest;
use crate::state::AppState;

// POST /api/send-message
// The body is read as JSON whatever Content-Type the caller sent.
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, DispatchError> {
    let request = serde_json::from_slice::<DispatchRequest>(&body)
        .map_err(|e| state.dispatcher.reject_unreadable(&e))?;

    state.dispatcher.dispatch(request).await?;

    Ok(Json(serde_json::json!({"ok": true})))
}
