//! Leaf-disease detection service
//!
//! The live path runs no image model: requests are validated (base64 plus a
//! recognizable image header) and answered with a placeholder prediction,
//! matching the reference deployment.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::Rng;
use shared::{care_instructions, DiseaseReport, LeafDisease, DISEASE_CLASSES};

use crate::error::{AppError, AppResult};

/// Disease detection over base64-encoded leaf photos
#[derive(Clone, Default)]
pub struct DiseaseService;

impl DiseaseService {
    /// Create a new DiseaseService instance
    pub fn new() -> Self {
        Self
    }

    /// Decode and validate the image, then produce a placeholder report
    pub fn detect_from_base64(&self, image: &str) -> AppResult<DiseaseReport> {
        let bytes = BASE64
            .decode(image)
            .map_err(|e| AppError::InvalidImage(format!("Invalid base64 image data: {}", e)))?;

        if image_format(&bytes).is_none() {
            return Err(AppError::InvalidImage(
                "Error opening image: unrecognized image format".to_string(),
            ));
        }

        let (disease, confidence) = placeholder_prediction();
        tracing::debug!(%disease, confidence, "Placeholder disease prediction");

        Ok(DiseaseReport {
            success: true,
            disease: disease.to_string(),
            confidence,
            recommendations: care_instructions(disease).to_string(),
        })
    }
}

/// Random class with a confidence drawn uniformly from [0.7, 1.0]
fn placeholder_prediction() -> (LeafDisease, f64) {
    let mut rng = rand::thread_rng();
    let disease = DISEASE_CLASSES[rng.gen_range(0..DISEASE_CLASSES.len())];
    let confidence = rng.gen_range(0.7..=1.0);
    (disease, confidence)
}

/// Sniff common raster formats by their magic bytes
fn image_format(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        Some("png")
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("jpeg")
    } else if bytes.starts_with(b"GIF8") {
        Some("gif")
    } else if bytes.starts_with(b"BM") {
        Some("bmp")
    } else if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
        Some("webp")
    } else {
        None
    }
}
