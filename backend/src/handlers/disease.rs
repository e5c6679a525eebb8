//! HTTP handlers for leaf-disease detection endpoints

use axum::{extract::State, Json};
use serde::Deserialize;
use shared::DiseaseReport;

use crate::error::AppResult;
use crate::services::DiseaseService;
use crate::AppState;

/// Request carrying a base64-encoded leaf photo
#[derive(Debug, Deserialize)]
pub struct ImageRequest {
    pub image: String,
}

/// Detect leaf disease from a base64-encoded image.
///
/// Serves both `/predict` and `/predict_base64`.
pub async fn detect_disease(
    State(_state): State<AppState>,
    Json(request): Json<ImageRequest>,
) -> AppResult<Json<DiseaseReport>> {
    let service = DiseaseService::new();
    let report = service.detect_from_base64(&request.image)?;
    Ok(Json(report))
}
