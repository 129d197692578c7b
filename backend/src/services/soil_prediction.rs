//! Soil moisture prediction service

use shared::{validate_finite, validate_moisture_level};

use crate::error::{AppError, AppResult};
use crate::models::{ModelContext, SoilFeatures, SoilPredictionRequest, SoilPredictionResult};

/// Soil prediction service
#[derive(Clone)]
pub struct SoilPredictionService {
    models: ModelContext,
}

impl SoilPredictionService {
    /// Create a new SoilPredictionService instance
    pub fn new(models: ModelContext) -> Self {
        Self { models }
    }

    /// Encode the reading, run the moisture model and derive advice
    pub fn predict(&self, request: &SoilPredictionRequest) -> AppResult<SoilPredictionResult> {
        for (field, value) in [
            ("temperature", request.temperature),
            ("humidity", request.humidity),
            ("rainfall", request.rainfall),
        ] {
            validate_finite(value).map_err(|msg| AppError::Validation {
                field: field.to_string(),
                message: format!("{}: {}", field, msg),
                message_ta: format!("{} ஒரு எண்ணாக இருக்க வேண்டும்", field),
            })?;
        }

        let predictor = self.models.moisture_predictor()?;
        let features = SoilFeatures::from(request);
        let moisture = predictor
            .predict(&features)
            .map_err(|e| AppError::PredictionFailed(e.to_string()))?;
        validate_moisture_level(moisture)
            .map_err(|msg| AppError::PredictionFailed(msg.to_string()))?;

        tracing::debug!(
            predictor = predictor.name(),
            crop_code = features.crop_code,
            season_code = features.season_code,
            moisture,
            "Soil moisture predicted"
        );

        Ok(SoilPredictionResult::from_moisture(moisture, request.language))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use shared::{
        ForestConfig, InferenceError, Language, MoisturePredictor, NextCheck,
        RandomForestRegressor,
    };

    /// Predictor returning a fixed value, for exercising the derivations
    struct FixedMoisture(f64);

    impl MoisturePredictor for FixedMoisture {
        fn predict(&self, _features: &SoilFeatures) -> Result<f64, InferenceError> {
            Ok(self.0)
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    fn service_with(predictor: impl MoisturePredictor + 'static) -> SoilPredictionService {
        SoilPredictionService::new(ModelContext::new(None, Some(Arc::new(predictor))))
    }

    fn request() -> SoilPredictionRequest {
        SoilPredictionRequest {
            temperature: 31.0,
            humidity: 64.0,
            rainfall: 8.0,
            crop_type: "Rice".to_string(),
            season: "monsoon".to_string(),
            location: Some("Thanjavur".to_string()),
            language: Language::En,
        }
    }

    #[test]
    fn test_dry_soil_needs_irrigation() {
        let result = service_with(FixedMoisture(22.4)).predict(&request()).unwrap();
        assert_eq!(result.moisture_level, 22);
        assert!(result.irrigation_needed);
        assert_eq!(result.next_check, NextCheck::In12Hours);
    }

    #[test]
    fn test_wet_soil_checks_in_48h() {
        let result = service_with(FixedMoisture(75.0)).predict(&request()).unwrap();
        assert!(!result.irrigation_needed);
        assert_eq!(result.next_check, NextCheck::In48Hours);
        assert_eq!(result.next_check_text, "In 48 hours");
    }

    #[test]
    fn test_out_of_range_model_output_fails() {
        let err = service_with(FixedMoisture(140.0))
            .predict(&request())
            .unwrap_err();
        assert!(matches!(err, AppError::PredictionFailed(_)));
    }

    #[test]
    fn test_missing_model_is_internal_error() {
        let service = SoilPredictionService::new(ModelContext::new(None, None));
        assert!(matches!(
            service.predict(&request()),
            Err(AppError::Internal(_))
        ));
    }

    #[test]
    fn test_forest_predictions_are_repeatable() {
        let forest = RandomForestRegressor::fit_synthetic(
            ForestConfig {
                n_estimators: 5,
                ..ForestConfig::default()
            },
            150,
        )
        .unwrap();
        let service = service_with(forest);
        let first = service.predict(&request()).unwrap();
        let second = service.predict(&request()).unwrap();
        assert_eq!(first, second);
    }
}
