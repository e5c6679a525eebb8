//! Weather API client for fetching current conditions
//!
//! Integrates with the OpenWeatherMap API; the crop scorer consumes the
//! simplified [`WeatherObservation`] this client produces.

use reqwest::Client;
use serde::Deserialize;
use shared::WeatherObservation;

use crate::error::{AppError, AppResult};

/// Factor converting the provider's 3-hour rainfall accumulation to an
/// approximate daily figure
const DAILY_RAINFALL_FACTOR: f64 = 8.0;

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    weather: Vec<OwmWeather>,
    main: OwmMain,
    rain: Option<OwmRain>,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwmRain {
    #[serde(rename = "3h")]
    three_hour: Option<f64>,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: "https://api.openweathermap.org/data/2.5".to_string(),
        }
    }

    /// Create a new WeatherClient with custom base URL (for testing)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetch current weather conditions by GPS coordinates
    pub async fn get_current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> AppResult<WeatherObservation> {
        let url = format!(
            "{}/weather?lat={}&lon={}&appid={}&units=metric",
            self.base_url, latitude, longitude, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::WeatherUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::WeatherUpstream { status, detail });
        }

        let data: OwmCurrentResponse = response.json().await.map_err(|e| {
            AppError::Internal(format!("Failed to parse weather response: {}", e))
        })?;

        Ok(convert_current_response(data))
    }
}

/// Convert the OpenWeatherMap payload to our observation format
fn convert_current_response(data: OwmCurrentResponse) -> WeatherObservation {
    let three_hour_rain = data
        .rain
        .as_ref()
        .and_then(|r| r.three_hour)
        .unwrap_or(0.0);

    WeatherObservation {
        temperature: data.main.temp,
        humidity: data.main.humidity,
        rainfall: three_hour_rain * DAILY_RAINFALL_FACTOR,
        description: data
            .weather
            .first()
            .map(|w| w.description.clone())
            .unwrap_or_default(),
    }
}
