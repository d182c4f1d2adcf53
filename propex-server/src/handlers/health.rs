//! Liveness and readiness probes.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::{
    errors::{AppError, AppResult},
    AppState,
};

/// `GET /healthz` - process liveness, no store involvement.
pub async fn healthz_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `GET /readyz` - round-trips the store; 503 when it does not answer.
pub async fn readyz_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Value>> {
    state
        .db
        .ping()
        .await
        .map_err(|e| AppError::unavailable(format!("store unavailable: {e}")))?;

    Ok(Json(json!({ "status": "ready" })))
}
