//! HTTP handlers for soil moisture prediction

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::middleware::{RequestId, ValidatedJson};
use crate::models::{SoilPredictionRequest, SoilPredictionResult};
use crate::services::SoilPredictionService;
use crate::AppState;

/// Predict soil moisture from environmental readings
pub async fn predict_soil(
    State(state): State<AppState>,
    request_id: RequestId,
    ValidatedJson(input): ValidatedJson<SoilPredictionRequest>,
) -> AppResult<Json<SoilPredictionResult>> {
    let service = SoilPredictionService::new(state.models);
    let result = service.predict(&input)?;

    tracing::info!(
        request_id = %request_id,
        crop_type = %input.crop_type,
        season = %input.season,
        location = input.location.as_deref().unwrap_or(""),
        moisture_level = result.moisture_level,
        irrigation_needed = result.irrigation_needed,
        "Soil prediction completed"
    );

    Ok(Json(result))
}
