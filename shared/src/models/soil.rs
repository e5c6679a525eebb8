//! Soil analysis models and agronomic rules

use serde::{Deserialize, Serialize};

/// A single soil sample: six numeric readings from a field test kit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SoilReading {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph: f64,
    pub rainfall: f64,
    pub temperature: f64,
}

impl SoilReading {
    /// Feature vector in the order the classifier was trained with:
    /// nitrogen, phosphorus, potassium, ph, rainfall, temperature
    pub fn features(&self) -> [f64; 6] {
        [
            self.nitrogen,
            self.phosphorus,
            self.potassium,
            self.ph,
            self.rainfall,
            self.temperature,
        ]
    }
}

/// Overall soil health classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SoilHealth {
    Good,
    Moderate,
    Poor,
}

impl SoilHealth {
    /// Class index used by the classifier (Good = 0, Moderate = 1, Poor = 2)
    pub fn class_index(&self) -> usize {
        match self {
            SoilHealth::Good => 0,
            SoilHealth::Moderate => 1,
            SoilHealth::Poor => 2,
        }
    }

    pub fn from_class_index(index: usize) -> Self {
        match index {
            0 => SoilHealth::Good,
            1 => SoilHealth::Moderate,
            _ => SoilHealth::Poor,
        }
    }
}

impl std::fmt::Display for SoilHealth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoilHealth::Good => write!(f, "Good"),
            SoilHealth::Moderate => write!(f, "Moderate"),
            SoilHealth::Poor => write!(f, "Poor"),
        }
    }
}

/// Per-nutrient evaluation against the fixed agronomic thresholds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NutrientStatus {
    Low,
    Optimal,
    High,
    Acidic,
    Alkaline,
}

/// Statuses for all four evaluated nutrients, in evaluation order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NutrientReport {
    pub nitrogen: NutrientStatus,
    pub phosphorus: NutrientStatus,
    pub potassium: NutrientStatus,
    pub ph: NutrientStatus,
}

/// Full soil analysis response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilAssessment {
    pub soil_health: SoilHealth,
    pub recommendations: Vec<String>,
    pub nutrient_status: NutrientReport,
    pub suitable_crops: Vec<String>,
}

// ============================================================================
// Nutrient thresholds
// ============================================================================

/// Optimal nitrogen range in kg/ha (inclusive)
pub const NITROGEN_OPTIMAL: (f64, f64) = (140.0, 280.0);
/// Optimal phosphorus range in kg/ha (inclusive)
pub const PHOSPHORUS_OPTIMAL: (f64, f64) = (10.0, 25.0);
/// Optimal potassium range in kg/ha (inclusive)
pub const POTASSIUM_OPTIMAL: (f64, f64) = (150.0, 250.0);
/// Optimal pH range (inclusive)
pub const PH_OPTIMAL: (f64, f64) = (6.0, 7.5);

fn macronutrient_status(value: f64, optimal: (f64, f64)) -> NutrientStatus {
    if value < optimal.0 {
        NutrientStatus::Low
    } else if value > optimal.1 {
        NutrientStatus::High
    } else {
        NutrientStatus::Optimal
    }
}

fn ph_status(ph: f64) -> NutrientStatus {
    if ph < PH_OPTIMAL.0 {
        NutrientStatus::Acidic
    } else if ph > PH_OPTIMAL.1 {
        NutrientStatus::Alkaline
    } else {
        NutrientStatus::Optimal
    }
}

/// Evaluate every nutrient of a reading against the fixed thresholds.
///
/// Boundary values are Optimal: the optimal ranges are inclusive on both
/// ends.
pub fn assess_nutrients(reading: &SoilReading) -> NutrientReport {
    NutrientReport {
        nitrogen: macronutrient_status(reading.nitrogen, NITROGEN_OPTIMAL),
        phosphorus: macronutrient_status(reading.phosphorus, PHOSPHORUS_OPTIMAL),
        potassium: macronutrient_status(reading.potassium, POTASSIUM_OPTIMAL),
        ph: ph_status(reading.ph),
    }
}

/// Advisory text for every non-Optimal nutrient, in evaluation order
/// (nitrogen, phosphorus, potassium, ph). Optimal nutrients produce nothing.
pub fn nutrient_recommendations(report: &NutrientReport) -> Vec<String> {
    let mut recommendations = Vec::new();

    match report.nitrogen {
        NutrientStatus::Low => {
            recommendations.push("Add nitrogen-rich fertilizers like urea or compost".to_string())
        }
        NutrientStatus::High => recommendations.push("Reduce nitrogen fertilization".to_string()),
        _ => {}
    }

    match report.phosphorus {
        NutrientStatus::Low => {
            recommendations.push("Add phosphate fertilizers or bone meal".to_string())
        }
        NutrientStatus::High => {
            recommendations.push("Avoid adding phosphorus fertilizers".to_string())
        }
        _ => {}
    }

    match report.potassium {
        NutrientStatus::Low => {
            recommendations.push("Add potassium-rich fertilizers like potash".to_string())
        }
        NutrientStatus::High => recommendations.push("Reduce potassium fertilization".to_string()),
        _ => {}
    }

    match report.ph {
        NutrientStatus::Acidic => recommendations.push("Add lime to increase soil pH".to_string()),
        NutrientStatus::Alkaline => {
            recommendations.push("Add sulfur to decrease soil pH".to_string())
        }
        _ => {}
    }

    recommendations
}

// ============================================================================
// Soil-based crop suitability
// ============================================================================

/// Crops suited to a reading given its overall health classification.
///
/// Output is de-duplicated; first-seen order is the canonical order.
pub fn suitable_crops(reading: &SoilReading, soil_health: SoilHealth) -> Vec<String> {
    let mut crops: Vec<&'static str> = Vec::new();

    match soil_health {
        SoilHealth::Good => {
            if reading.ph >= 6.0 && reading.ph <= 7.0 {
                if reading.nitrogen >= 140.0 {
                    crops.extend(["Tomatoes", "Leafy Greens"]);
                }
                if reading.phosphorus >= 15.0 {
                    crops.extend(["Beans", "Peas"]);
                }
                if reading.potassium >= 200.0 {
                    crops.extend(["Potatoes", "Sweet Potatoes"]);
                }
            }

            if reading.rainfall >= 750.0 {
                crops.extend(["Rice", "Sugarcane"]);
            } else {
                crops.extend(["Wheat", "Millet"]);
            }

            if reading.temperature >= 25.0 {
                crops.extend(["Cotton", "Sunflower"]);
            } else {
                crops.extend(["Carrots", "Cabbage"]);
            }
        }
        SoilHealth::Moderate => {
            // Crops more tolerant of suboptimal conditions
            crops.extend(["Maize", "Sorghum", "Groundnut"]);

            if reading.rainfall < 750.0 {
                crops.extend(["Pearl Millet", "Chickpea"]);
            }
        }
        SoilHealth::Poor => {
            // Crops that can tolerate poor soils
            crops.extend(["Cassava", "Sweet Potato", "Cowpea"]);
        }
    }

    let mut deduped: Vec<String> = Vec::with_capacity(crops.len());
    for crop in crops {
        if !deduped.iter().any(|c| c == crop) {
            deduped.push(crop.to_string());
        }
    }
    deduped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(nitrogen: f64, phosphorus: f64, potassium: f64, ph: f64) -> SoilReading {
        SoilReading {
            nitrogen,
            phosphorus,
            potassium,
            ph,
            rainfall: 1000.0,
            temperature: 25.0,
        }
    }

    #[test]
    fn test_nutrient_boundaries_are_optimal() {
        // Lower bounds
        let report = assess_nutrients(&reading(140.0, 10.0, 150.0, 6.0));
        assert_eq!(report.nitrogen, NutrientStatus::Optimal);
        assert_eq!(report.phosphorus, NutrientStatus::Optimal);
        assert_eq!(report.potassium, NutrientStatus::Optimal);
        assert_eq!(report.ph, NutrientStatus::Optimal);

        // Upper bounds
        let report = assess_nutrients(&reading(280.0, 25.0, 250.0, 7.5));
        assert_eq!(report.nitrogen, NutrientStatus::Optimal);
        assert_eq!(report.phosphorus, NutrientStatus::Optimal);
        assert_eq!(report.potassium, NutrientStatus::Optimal);
        assert_eq!(report.ph, NutrientStatus::Optimal);
    }

    #[test]
    fn test_nutrient_low_and_high() {
        let report = assess_nutrients(&reading(139.9, 9.9, 149.9, 5.9));
        assert_eq!(report.nitrogen, NutrientStatus::Low);
        assert_eq!(report.phosphorus, NutrientStatus::Low);
        assert_eq!(report.potassium, NutrientStatus::Low);
        assert_eq!(report.ph, NutrientStatus::Acidic);

        let report = assess_nutrients(&reading(280.1, 25.1, 250.1, 7.6));
        assert_eq!(report.nitrogen, NutrientStatus::High);
        assert_eq!(report.phosphorus, NutrientStatus::High);
        assert_eq!(report.potassium, NutrientStatus::High);
        assert_eq!(report.ph, NutrientStatus::Alkaline);
    }

    #[test]
    fn test_recommendations_follow_nutrient_order() {
        let report = assess_nutrients(&reading(50.0, 28.0, 100.0, 8.2));
        let recommendations = nutrient_recommendations(&report);

        assert_eq!(recommendations.len(), 4);
        assert_eq!(
            recommendations[0],
            "Add nitrogen-rich fertilizers like urea or compost"
        );
        assert_eq!(recommendations[1], "Avoid adding phosphorus fertilizers");
        assert_eq!(
            recommendations[2],
            "Add potassium-rich fertilizers like potash"
        );
        assert_eq!(recommendations[3], "Add sulfur to decrease soil pH");
    }

    #[test]
    fn test_all_optimal_yields_no_recommendations() {
        let report = assess_nutrients(&reading(200.0, 18.0, 200.0, 6.5));
        assert!(nutrient_recommendations(&report).is_empty());
    }

    #[test]
    fn test_good_soil_full_crop_set() {
        let sample = SoilReading {
            nitrogen: 200.0,
            phosphorus: 18.0,
            potassium: 210.0,
            ph: 6.5,
            rainfall: 1000.0,
            temperature: 28.0,
        };
        let crops = suitable_crops(&sample, SoilHealth::Good);

        // Every pH-gated pair plus the rainfall and temperature branches
        assert_eq!(
            crops,
            vec![
                "Tomatoes",
                "Leafy Greens",
                "Beans",
                "Peas",
                "Potatoes",
                "Sweet Potatoes",
                "Rice",
                "Sugarcane",
                "Cotton",
                "Sunflower"
            ]
        );
    }

    #[test]
    fn test_good_soil_dry_and_cool() {
        let sample = SoilReading {
            nitrogen: 100.0,
            phosphorus: 5.0,
            potassium: 100.0,
            ph: 7.2,
            rainfall: 600.0,
            temperature: 20.0,
        };
        let crops = suitable_crops(&sample, SoilHealth::Good);
        assert_eq!(crops, vec!["Wheat", "Millet", "Carrots", "Cabbage"]);
    }

    #[test]
    fn test_moderate_soil_low_rainfall_additions() {
        let sample = SoilReading {
            nitrogen: 120.0,
            phosphorus: 12.0,
            potassium: 160.0,
            ph: 6.8,
            rainfall: 600.0,
            temperature: 30.0,
        };
        let crops = suitable_crops(&sample, SoilHealth::Moderate);
        assert_eq!(
            crops,
            vec!["Maize", "Sorghum", "Groundnut", "Pearl Millet", "Chickpea"]
        );
    }

    #[test]
    fn test_poor_soil_fixed_set() {
        let sample = reading(10.0, 2.0, 20.0, 4.5);
        let crops = suitable_crops(&sample, SoilHealth::Poor);
        assert_eq!(crops, vec!["Cassava", "Sweet Potato", "Cowpea"]);
    }

    #[test]
    fn test_feature_order_matches_field_order() {
        let sample = SoilReading {
            nitrogen: 1.0,
            phosphorus: 2.0,
            potassium: 3.0,
            ph: 4.0,
            rainfall: 5.0,
            temperature: 6.0,
        };
        assert_eq!(sample.features(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_soil_health_class_index_round_trip() {
        for health in [SoilHealth::Good, SoilHealth::Moderate, SoilHealth::Poor] {
            assert_eq!(SoilHealth::from_class_index(health.class_index()), health);
        }
    }

    #[test]
    fn test_serialized_labels() {
        assert_eq!(
            serde_json::to_string(&SoilHealth::Good).unwrap(),
            "\"Good\""
        );
        assert_eq!(
            serde_json::to_string(&NutrientStatus::Alkaline).unwrap(),
            "\"Alkaline\""
        );
    }
}
