//! Route definitions for the Agro Advisory Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes.
///
/// Paths match the public contract of the original deployment, so they sit
/// at the router root rather than under a version prefix.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Leaf-disease detection (both spellings serve the same handler)
        .route("/predict", post(handlers::detect_disease))
        .route("/predict_base64", post(handlers::detect_disease))
        // Soil analysis
        .route("/analyze_soil", post(handlers::analyze_soil))
        // Weather-based crop prediction
        .route("/predict_crops", post(handlers::predict_crops))
        // Health check
        .route("/health", get(handlers::health_check))
}
