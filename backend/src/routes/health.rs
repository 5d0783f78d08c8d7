// src/routes/health.rs

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use tracing::error;

use crate::routes::AppState;

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    if let Err(err) = state.store.ping().await {
        error!("DB health check failed: {:?}", err);
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "error",
                "db": "down",
            })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "env": state.env.as_str(),
        })),
    )
}
