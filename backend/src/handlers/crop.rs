//! HTTP handlers for crop disease analysis

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::middleware::{RequestId, ValidatedJson};
use crate::models::{CropAnalysisRequest, CropAnalysisResult};
use crate::services::CropAnalysisService;
use crate::AppState;

/// Analyze a crop image for disease
pub async fn analyze_crop(
    State(state): State<AppState>,
    request_id: RequestId,
    ValidatedJson(input): ValidatedJson<CropAnalysisRequest>,
) -> AppResult<Json<CropAnalysisResult>> {
    let service = CropAnalysisService::new(state.models);
    let result = service.analyze(&input).await?;

    tracing::info!(
        request_id = %request_id,
        language = %input.language,
        disease = %result.disease,
        confidence = result.confidence,
        severity = %result.severity,
        "Crop analysis completed"
    );

    Ok(Json(result))
}
