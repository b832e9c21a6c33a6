//! Health Route

use axum::{extract::State, Json};
use serde::Serialize;

use crate::SharedContext;

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub version: String,
    pub uptime_seconds: u64,
    pub models_loaded: bool,
    pub classes: Vec<String>,
}

/// Health check handler
pub async fn health(State(ctx): State<SharedContext>) -> Json<HealthResponse> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let classes = ctx
        .engine
        .as_ref()
        .map(|engine| engine.labels().classes().to_vec())
        .unwrap_or_default();

    Json(HealthResponse {
        status: (if ctx.engine.is_some() { "healthy" } else { "degraded" }).to_string(),
        timestamp,
        version: ctx.version.clone(),
        uptime_seconds: ctx.start_time.elapsed().as_secs(),
        models_loaded: ctx.engine.is_some(),
        classes,
    })
}
