//! HTTP handlers for soil analysis endpoints

use axum::{extract::State, Json};
use shared::{SoilAssessment, SoilReading};

use crate::error::AppResult;
use crate::AppState;

/// Analyze a soil reading: classifier label, nutrient statuses, advisory
/// text and suitable crops.
pub async fn analyze_soil(
    State(state): State<AppState>,
    Json(reading): Json<SoilReading>,
) -> AppResult<Json<SoilAssessment>> {
    let assessment = state.analyzer.analyze(&reading);
    Ok(Json(assessment))
}
