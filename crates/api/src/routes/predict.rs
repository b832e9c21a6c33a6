//! Prediction Route

use axum::{extract::State, Json};
use metrics::{counter, histogram};
use profile_catalog::Profile;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::SharedContext;

/// Request body for `POST /predict`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Questionnaire answers in `R1..R8, I1..I8, A1..A8, S1..S8, E1..E8, C1..C8` order
    pub answers: Vec<i64>,
}

/// Predict the profile for a set of answers
pub async fn predict(
    State(ctx): State<SharedContext>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<Profile>, ApiError> {
    let result = predict_profile(&ctx, &request);

    let outcome = match &result {
        Ok(_) => "ok",
        Err(e) if e.status().is_client_error() => "rejected",
        Err(ApiError::ModelsUnavailable) => "unavailable",
        Err(_) => "failed",
    };
    counter!("predictions_total", "outcome" => outcome).increment(1);

    result.map(Json)
}

fn predict_profile(ctx: &SharedContext, request: &PredictRequest) -> Result<Profile, ApiError> {
    let answers = ctx.validator.validate(&request.answers).map_err(|e| {
        warn!("Rejected prediction request: {}", e);
        e
    })?;

    let engine = ctx.engine.as_ref().ok_or(ApiError::ModelsUnavailable)?;
    let prediction = engine.predict(&answers)?;
    histogram!("prediction_latency_us").record(prediction.latency_us as f64);

    let profile = ctx
        .catalog
        .lookup(&prediction.label)
        .ok_or_else(|| ApiError::UnmappedLabel(prediction.label.clone()))?;

    debug!("Answers mapped to profile {:?}", prediction.label);
    counter!("profile_label_total", "label" => prediction.label).increment(1);
    Ok(profile.clone())
}
