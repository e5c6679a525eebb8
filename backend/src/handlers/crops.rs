//! HTTP handlers for weather-based crop prediction

use axum::{extract::State, Json};
use shared::{CropForecast, Location};

use crate::error::{AppError, AppResult};
use crate::external::WeatherClient;
use crate::services::CropAdvisoryService;
use crate::AppState;

/// Rank the crop catalog against live weather at the given location
pub async fn predict_crops(
    State(state): State<AppState>,
    Json(location): Json<Location>,
) -> AppResult<Json<CropForecast>> {
    let weather = &state.config.weather;
    if weather.api_key.is_empty() {
        return Err(AppError::Configuration(
            "Weather API key not configured".to_string(),
        ));
    }

    let client = WeatherClient::with_base_url(weather.api_key.clone(), weather.api_endpoint.clone());
    let service = CropAdvisoryService::new(client);
    let forecast = service.forecast(location).await?;
    Ok(Json(forecast))
}
