//! Business logic services for the Farmer AI ML service

pub mod crop_analysis;
pub mod soil_prediction;

pub use crop_analysis::CropAnalysisService;
pub use soil_prediction::SoilPredictionService;
