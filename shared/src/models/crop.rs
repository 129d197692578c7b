//! Crop image analysis models

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::DiseaseLabel;
use crate::types::{Language, Severity};

/// Confidence above which a finding is reported as `medium` severity
pub const MEDIUM_SEVERITY_THRESHOLD: f64 = 0.7;

/// Request to analyze a crop image stored on the service host
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CropAnalysisRequest {
    #[validate(custom = "usable_image_path")]
    pub image_path: String,
    #[serde(default)]
    pub language: Language,
}

fn usable_image_path(path: &str) -> Result<(), ValidationError> {
    crate::validation::validate_image_path(path).map_err(|msg| {
        let mut err = ValidationError::new("image_path");
        err.message = Some(Cow::Borrowed(msg));
        err
    })
}

/// User-facing analysis result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropAnalysisResult {
    /// Localized disease name
    pub disease: String,
    pub confidence: f64,
    /// Localized treatment advice
    pub treatment: String,
    pub severity: Severity,
}

/// Raw classifier output before localization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub label: DiseaseLabel,
    pub confidence: f64,
}

/// Bucket a confidence score into a severity level
pub fn severity_for_confidence(confidence: f64) -> Severity {
    if confidence > MEDIUM_SEVERITY_THRESHOLD {
        Severity::Medium
    } else {
        Severity::Low
    }
}
