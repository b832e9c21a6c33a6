//! Prometheus Exposition

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::SharedContext;

/// Render metrics in Prometheus text format
pub async fn render(State(ctx): State<SharedContext>) -> impl IntoResponse {
    match &ctx.metrics {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (StatusCode::NOT_FOUND, "metrics recorder not installed".to_string()),
    }
}
