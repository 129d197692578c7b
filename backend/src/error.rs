//! Error handling for the Farmer AI ML service
//!
//! Provides consistent error responses in English and Tamil

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::InferenceError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_ta: String,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Model errors
    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Prediction failed: {0}")]
    PredictionFailed(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_ta: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AnalysisFailed(_)
            | AppError::PredictionFailed(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_detail = match &self {
            AppError::Validation {
                field,
                message,
                message_ta,
            } => ErrorDetail {
                code: "VALIDATION_ERROR".to_string(),
                message_en: message.clone(),
                message_ta: message_ta.clone(),
                field: Some(field.clone()),
            },
            AppError::ValidationError(msg) => ErrorDetail {
                code: "VALIDATION_ERROR".to_string(),
                message_en: msg.clone(),
                message_ta: format!("தரவு தவறானது: {}", msg),
                field: None,
            },
            AppError::NotFound(resource) => ErrorDetail {
                code: "NOT_FOUND".to_string(),
                message_en: format!("{} not found", resource),
                message_ta: format!("{} கிடைக்கவில்லை", resource),
                field: None,
            },
            AppError::AnalysisFailed(msg) => ErrorDetail {
                code: "ANALYSIS_FAILED".to_string(),
                message_en: format!("Analysis failed: {}", msg),
                message_ta: "பயிர் பகுப்பாய்வு தோல்வியடைந்தது".to_string(),
                field: None,
            },
            AppError::PredictionFailed(msg) => ErrorDetail {
                code: "PREDICTION_FAILED".to_string(),
                message_en: format!("Prediction failed: {}", msg),
                message_ta: "மண் ஈரப்பத கணிப்பு தோல்வியடைந்தது".to_string(),
                field: None,
            },
            AppError::Internal(msg) => ErrorDetail {
                code: "INTERNAL_ERROR".to_string(),
                message_en: msg.clone(),
                message_ta: "சேவையகத்தில் உள் பிழை ஏற்பட்டது".to_string(),
                field: None,
            },
        };

        if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Model failures outside a request-specific context are internal errors
impl From<InferenceError> for AppError {
    fn from(err: InferenceError) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::NotFound("Image file".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::ValidationError("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(InferenceError::NotLoaded("soil moisture model")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::PredictionFailed("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::NotFound("Image file".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::Validation {
            field: "image_path".into(),
            message: "image_path must not be empty".into(),
            message_ta: "படக் கோப்பு பாதை காலியாக இருக்கக்கூடாது".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unloaded_model_body() {
        let response = AppError::from(InferenceError::NotLoaded("crop classifier")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert_eq!(body["error"]["message_en"], "crop classifier is not loaded");
        assert!(body["error"].get("field").is_none());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            AppError::AnalysisFailed("boom".into()).to_string(),
            "Analysis failed: boom"
        );
        assert_eq!(
            AppError::NotFound("Image file".into()).to_string(),
            "Resource not found: Image file"
        );
    }
}
