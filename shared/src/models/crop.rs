//! Weather-driven crop suitability scoring

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::WeatherObservation;

/// Calendar season used by the crop scorer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Spring => write!(f, "Spring"),
            Season::Summer => write!(f, "Summer"),
            Season::Fall => write!(f, "Fall"),
            Season::Winter => write!(f, "Winter"),
        }
    }
}

/// Season for a calendar month: 3-5 Spring, 6-8 Summer, 9-11 Fall, else
/// Winter. The temperature argument is accepted but does not influence the
/// result, matching the reference behavior.
pub fn season_for_month(month: u32, _temperature: f64) -> Season {
    match month {
        3..=5 => Season::Spring,
        6..=8 => Season::Summer,
        9..=11 => Season::Fall,
        _ => Season::Winter,
    }
}

/// Growing requirements for one catalog crop. All ranges are inclusive.
#[derive(Debug, Clone, Copy)]
pub struct CropRequirements {
    pub name: &'static str,
    pub temperature_c: (f64, f64),
    pub rainfall_mm: (f64, f64),
    pub humidity_percent: (f64, f64),
    pub seasons: &'static [Season],
}

/// The fixed crop catalog, in scoring order
pub const CROP_CATALOG: &[CropRequirements] = &[
    CropRequirements {
        name: "Rice",
        temperature_c: (20.0, 35.0),
        rainfall_mm: (150.0, 300.0),
        humidity_percent: (60.0, 90.0),
        seasons: &[Season::Summer, Season::Fall],
    },
    CropRequirements {
        name: "Wheat",
        temperature_c: (15.0, 25.0),
        rainfall_mm: (50.0, 100.0),
        humidity_percent: (40.0, 70.0),
        seasons: &[Season::Winter, Season::Spring],
    },
    CropRequirements {
        name: "Corn",
        temperature_c: (18.0, 32.0),
        rainfall_mm: (50.0, 200.0),
        humidity_percent: (50.0, 80.0),
        seasons: &[Season::Spring, Season::Summer],
    },
    CropRequirements {
        name: "Cotton",
        temperature_c: (21.0, 35.0),
        rainfall_mm: (50.0, 150.0),
        humidity_percent: (40.0, 70.0),
        seasons: &[Season::Summer],
    },
    CropRequirements {
        name: "Sugarcane",
        temperature_c: (20.0, 35.0),
        rainfall_mm: (150.0, 300.0),
        humidity_percent: (60.0, 90.0),
        seasons: &[Season::Spring, Season::Summer],
    },
    CropRequirements {
        name: "Tomatoes",
        temperature_c: (15.0, 30.0),
        rainfall_mm: (40.0, 100.0),
        humidity_percent: (50.0, 80.0),
        seasons: &[Season::Spring, Season::Summer],
    },
    CropRequirements {
        name: "Potatoes",
        temperature_c: (15.0, 25.0),
        rainfall_mm: (30.0, 100.0),
        humidity_percent: (40.0, 75.0),
        seasons: &[Season::Spring, Season::Fall],
    },
    CropRequirements {
        name: "Onions",
        temperature_c: (12.0, 28.0),
        rainfall_mm: (30.0, 100.0),
        humidity_percent: (40.0, 70.0),
        seasons: &[Season::Winter, Season::Spring],
    },
];

/// Number of predicates each crop is scored against
const PREDICATES_PER_CROP: u32 = 4;

/// Minimum confidence (percent) for a crop to be suggested
pub const CONFIDENCE_THRESHOLD: f64 = 50.0;

/// Crop forecast response: ranked crop names plus their confidences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropForecast {
    pub weather: WeatherObservation,
    pub suitable_crops: Vec<String>,
    pub season: Season,
    pub confidence_scores: BTreeMap<String, f64>,
}

fn in_range(value: f64, range: (f64, f64)) -> bool {
    value >= range.0 && value <= range.1
}

/// Confidence percentage for one crop: satisfied predicates / 4, as a
/// percentage rounded to two decimals.
pub fn crop_confidence(crop: &CropRequirements, weather: &WeatherObservation, season: Season) -> f64 {
    let mut score = 0u32;

    if in_range(weather.temperature, crop.temperature_c) {
        score += 1;
    }
    if in_range(weather.rainfall, crop.rainfall_mm) {
        score += 1;
    }
    if in_range(weather.humidity, crop.humidity_percent) {
        score += 1;
    }
    if crop.seasons.contains(&season) {
        score += 1;
    }

    let confidence = f64::from(score) / f64::from(PREDICATES_PER_CROP) * 100.0;
    (confidence * 100.0).round() / 100.0
}

/// Score the whole catalog against an observation and calendar month.
///
/// Crops below [`CONFIDENCE_THRESHOLD`] are dropped; the rest are sorted
/// descending by confidence with catalog order as the tie-break.
pub fn rank_crops(weather: &WeatherObservation, month: u32) -> CropForecast {
    let season = season_for_month(month, weather.temperature);

    let mut ranked: Vec<(&'static str, f64)> = CROP_CATALOG
        .iter()
        .map(|crop| (crop.name, crop_confidence(crop, weather, season)))
        .filter(|(_, confidence)| *confidence >= CONFIDENCE_THRESHOLD)
        .collect();

    // Stable sort keeps catalog order between equal confidences
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let suitable_crops = ranked.iter().map(|(name, _)| name.to_string()).collect();
    let confidence_scores = ranked
        .iter()
        .map(|(name, confidence)| (name.to_string(), *confidence))
        .collect();

    CropForecast {
        weather: weather.clone(),
        suitable_crops,
        season,
        confidence_scores,
    }
}
