//! Evaluation endpoint handler

use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, EvaluateRequest, EvaluateResponse, Json};

/// POST /evaluate
pub async fn evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, ApiError> {
    debug!(
        model_path = %request.model_path,
        dataset_path = %request.dataset_path,
        "Evaluating model"
    );

    let outcome = state
        .evaluation_service
        .evaluate(request.model_path, request.dataset_path)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(EvaluateResponse {
        accuracy: outcome.accuracy(),
    }))
}
