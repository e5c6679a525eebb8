//! Crop advisory service: live weather plus the seasonal catalog scorer

use chrono::{Datelike, Utc};
use shared::{rank_crops, CropForecast, Location};

use crate::error::AppResult;
use crate::external::weather::WeatherClient;

/// Weather-driven crop suggestions for a location
#[derive(Clone)]
pub struct CropAdvisoryService {
    weather: WeatherClient,
}

impl CropAdvisoryService {
    /// Create a new CropAdvisoryService instance
    pub fn new(weather: WeatherClient) -> Self {
        Self { weather }
    }

    /// Fetch current conditions for the location and rank the crop catalog
    /// against them and the current calendar month.
    pub async fn forecast(&self, location: Location) -> AppResult<CropForecast> {
        let observation = self
            .weather
            .get_current_weather(location.latitude, location.longitude)
            .await?;

        let month = Utc::now().month();

        tracing::debug!(
            temperature = observation.temperature,
            humidity = observation.humidity,
            rainfall = observation.rainfall,
            month,
            "Scoring crop catalog"
        );

        Ok(rank_crops(&observation, month))
    }
}
