//! Route definitions for the Farmer AI ML service

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Banner and health (public)
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        // Model endpoints
        .route("/analyze-crop", post(handlers::analyze_crop))
        .route("/predict-soil", post(handlers::predict_soil))
}
