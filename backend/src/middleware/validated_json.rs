//! JSON body extractor with validation
//!
//! Deserialization failures and `validator` rule violations both surface as
//! bilingual `VALIDATION_ERROR` responses instead of axum's plain-text
//! rejections.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::AppError;

/// Extractor for a JSON body that passes its `Validate` rules
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;
        value.validate().map_err(validation_failure)?;
        Ok(Self(value))
    }
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    AppError::ValidationError(rejection.body_text())
}

/// Report the first failing field (alphabetically, so responses are stable)
fn validation_failure(errors: ValidationErrors) -> AppError {
    let field_errors = errors.field_errors();
    let Some((field, errs)) = field_errors.into_iter().min_by_key(|(field, _)| *field) else {
        return AppError::ValidationError(errors.to_string());
    };

    let message = errs
        .first()
        .and_then(|e| e.message.as_ref())
        .map(|m| m.to_string())
        .unwrap_or_else(|| format!("{} is invalid", field));

    AppError::Validation {
        field: field.to_string(),
        message,
        message_ta: format!("{} புலம் தவறானது", field),
    }
}
