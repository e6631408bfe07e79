use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::domain::model::Classification;
use crate::server::dto::RecommendRequest;
use crate::server::error::HttpError;
use crate::server::AppState;

/// Classify a laptop spec and return tiers plus at most five activities.
pub async fn recommend(
    State(state): State<AppState>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<Json<Classification>, HttpError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!("⚠️ Rejected request body: {}", rejection.body_text());
        HttpError::from(rejection)
    })?;

    let spec = request.into_spec().map_err(|e| {
        tracing::warn!("⚠️ Invalid laptop spec: {}", e);
        HttpError::from(e)
    })?;

    let classification = state.engine.classify(&spec);
    tracing::info!(
        "Recommended {} activities (processor={}, gpu={})",
        classification.activities.len(),
        classification.processor_tier,
        classification.gpu_tier
    );

    Ok(Json(classification))
}

pub async fn health_check() -> &'static str {
    "OK"
}
