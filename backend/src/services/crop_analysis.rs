//! Crop analysis service: image checks, classification and localization

use std::path::Path;

use shared::{
    disease_name, severity_for_confidence, treatment, validate_confidence, validate_image_path,
    Language,
};

use crate::error::{AppError, AppResult};
use crate::models::{CropAnalysisRequest, CropAnalysisResult, ModelContext, Prediction};

/// Crop analysis service
#[derive(Clone)]
pub struct CropAnalysisService {
    models: ModelContext,
}

impl CropAnalysisService {
    /// Create a new CropAnalysisService instance
    pub fn new(models: ModelContext) -> Self {
        Self { models }
    }

    /// Classify the referenced image and build the localized result
    pub async fn analyze(&self, request: &CropAnalysisRequest) -> AppResult<CropAnalysisResult> {
        validate_image_path(&request.image_path).map_err(|msg| AppError::Validation {
            field: "image_path".to_string(),
            message: msg.to_string(),
            message_ta: "படக் கோப்பு பாதை தவறானது".to_string(),
        })?;

        let path = Path::new(&request.image_path);
        let exists = tokio::fs::try_exists(path)
            .await
            .map_err(|e| AppError::AnalysisFailed(format!("cannot access image: {}", e)))?;
        if !exists {
            return Err(AppError::NotFound("Image file".to_string()));
        }

        let classifier = self.models.classifier()?;
        let prediction = classifier
            .classify(path)
            .map_err(|e| AppError::AnalysisFailed(e.to_string()))?;
        validate_confidence(prediction.confidence)
            .map_err(|msg| AppError::AnalysisFailed(msg.to_string()))?;

        tracing::debug!(
            classifier = classifier.name(),
            label = %prediction.label,
            confidence = prediction.confidence,
            "Image classified"
        );

        Ok(build_result(prediction, request.language))
    }
}

/// Map a raw prediction to the user-facing result
pub fn build_result(prediction: Prediction, language: Language) -> CropAnalysisResult {
    CropAnalysisResult {
        disease: disease_name(prediction.label, language).to_string(),
        confidence: prediction.confidence,
        treatment: treatment(prediction.label, language).to_string(),
        severity: severity_for_confidence(prediction.confidence),
    }
}
