//! Leaf-disease classes and care guidance

use serde::{Deserialize, Serialize};

/// Recognized leaf-disease classes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LeafDisease {
    Healthy,
    #[serde(rename = "Leaf Blight")]
    LeafBlight,
    #[serde(rename = "Powdery Mildew")]
    PowderyMildew,
    #[serde(rename = "Leaf Spot")]
    LeafSpot,
}

/// All classes, in the order the original model indexed them
pub const DISEASE_CLASSES: [LeafDisease; 4] = [
    LeafDisease::Healthy,
    LeafDisease::LeafBlight,
    LeafDisease::PowderyMildew,
    LeafDisease::LeafSpot,
];

impl std::fmt::Display for LeafDisease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeafDisease::Healthy => write!(f, "Healthy"),
            LeafDisease::LeafBlight => write!(f, "Leaf Blight"),
            LeafDisease::PowderyMildew => write!(f, "Powdery Mildew"),
            LeafDisease::LeafSpot => write!(f, "Leaf Spot"),
        }
    }
}

/// Fixed care guidance per disease class
pub fn care_instructions(disease: LeafDisease) -> &'static str {
    match disease {
        LeafDisease::LeafBlight => {
            "\n\
             \u{2022} Apply copper-based fungicides\n\
             \u{2022} Improve air circulation\n\
             \u{2022} Remove infected leaves\n\
             \u{2022} Water at soil level to avoid wet leaves"
        }
        LeafDisease::PowderyMildew => {
            "\n\
             \u{2022} Apply sulfur-based fungicides\n\
             \u{2022} Increase plant spacing\n\
             \u{2022} Avoid overhead watering\n\
             \u{2022} Ensure good air circulation"
        }
        LeafDisease::LeafSpot => {
            "\n\
             \u{2022} Remove infected leaves\n\
             \u{2022} Apply appropriate fungicide\n\
             \u{2022} Maintain proper spacing\n\
             \u{2022} Avoid overwatering"
        }
        LeafDisease::Healthy => {
            "\n\
             \u{2022} Continue current care practices\n\
             \u{2022} Monitor regularly for any changes\n\
             \u{2022} Maintain good air circulation\n\
             \u{2022} Follow regular fertilization schedule"
        }
    }
}

/// Disease detection response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseReport {
    pub success: bool,
    pub disease: String,
    pub confidence: f64,
    pub recommendations: String,
}
