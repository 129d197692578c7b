//! Model interfaces and the placeholder implementations behind them
//!
//! Request handling only sees [`Classifier`] and [`MoisturePredictor`], so a
//! trained model can replace the heuristics without touching the HTTP layer.

use std::path::Path;

use thiserror::Error;

use crate::models::{Prediction, SoilFeatures};

mod forest;
mod heuristic;

pub use forest::*;
pub use heuristic::*;

/// Errors raised while fitting or evaluating a model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    #[error("{0} is not loaded")]
    NotLoaded(&'static str),

    #[error("training set is empty")]
    EmptyTrainingSet,

    #[error("expected {expected} features, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid model configuration: {0}")]
    InvalidConfig(String),
}

/// Crop disease classifier over an image on disk
pub trait Classifier: Send + Sync {
    fn classify(&self, image: &Path) -> Result<Prediction, InferenceError>;

    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    fn is_ready(&self) -> bool {
        true
    }
}

/// Soil moisture regressor over environmental features
pub trait MoisturePredictor: Send + Sync {
    /// Predicted moisture in percent
    fn predict(&self, features: &SoilFeatures) -> Result<f64, InferenceError>;

    fn name(&self) -> &'static str;

    fn is_ready(&self) -> bool {
        true
    }
}
