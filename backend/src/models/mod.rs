//! Model context for the Farmer AI ML service
//!
//! Re-exports models from the shared crate and owns the inference models,
//! which are built once at startup and shared read-only by every request.

use std::sync::Arc;
use std::time::Instant;

pub use shared::models::*;
use shared::{
    Classifier, HeuristicClassifier, InferenceError, MoisturePredictor, RandomForestRegressor,
};

use crate::config::Config;

/// Immutable set of models handed to every request handler
#[derive(Clone)]
pub struct ModelContext {
    classifier: Option<Arc<dyn Classifier>>,
    moisture: Option<Arc<dyn MoisturePredictor>>,
}

impl ModelContext {
    pub fn new(
        classifier: Option<Arc<dyn Classifier>>,
        moisture: Option<Arc<dyn MoisturePredictor>>,
    ) -> Self {
        Self {
            classifier,
            moisture,
        }
    }

    /// Build the models described by the configuration.
    ///
    /// A model that fails to build is logged and left unloaded; the server
    /// still starts and reports `models_loaded: false` on `/health`.
    pub fn load(config: &Config) -> Self {
        let classifier: Option<Arc<dyn Classifier>> = match config.classifier.policy() {
            Ok(policy) => Some(Arc::new(HeuristicClassifier::new(policy))),
            Err(e) => {
                tracing::error!(error = %e, "Failed to build crop classifier");
                None
            }
        };

        let started = Instant::now();
        let moisture: Option<Arc<dyn MoisturePredictor>> = match RandomForestRegressor::fit_synthetic(
            config.models.forest_config(),
            config.models.training_samples,
        ) {
            Ok(forest) => {
                tracing::info!(
                    trees = forest.n_trees(),
                    samples = config.models.training_samples,
                    max_depth = forest.max_tree_depth(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Soil moisture model fitted"
                );
                Some(Arc::new(forest))
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fit soil moisture model");
                None
            }
        };

        Self::new(classifier, moisture)
    }

    pub fn classifier(&self) -> Result<&dyn Classifier, InferenceError> {
        self.classifier
            .as_deref()
            .ok_or(InferenceError::NotLoaded("crop classifier"))
    }

    pub fn moisture_predictor(&self) -> Result<&dyn MoisturePredictor, InferenceError> {
        self.moisture
            .as_deref()
            .ok_or(InferenceError::NotLoaded("soil moisture model"))
    }

    /// True when every model is present and ready to serve
    pub fn models_loaded(&self) -> bool {
        let classifier_ready = self.classifier.as_ref().is_some_and(|c| c.is_ready());
        let moisture_ready = self.moisture.as_ref().is_some_and(|m| m.is_ready());
        classifier_ready && moisture_ready
    }
}
