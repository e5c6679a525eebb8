//! Weather models shared between the weather client and the crop scorer

use serde::{Deserialize, Serialize};

/// GPS location for a crop forecast request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Point-in-time weather reading used for crop scoring.
///
/// Rainfall is an approximate daily figure in mm (the provider's 3-hour
/// accumulation scaled by 8).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherObservation {
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observation_round_trips_through_json() {
        let observation = WeatherObservation {
            temperature: 25.5,
            humidity: 70.0,
            rainfall: 16.0,
            description: "light rain".to_string(),
        };

        let json = serde_json::to_string(&observation).unwrap();
        let parsed: WeatherObservation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, observation);
    }
}
