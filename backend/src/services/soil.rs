//! Soil analysis service: classifier lifecycle and the full assessment

use std::fs;
use std::path::Path;

use shared::{
    assess_nutrients, nutrient_recommendations, suitable_crops, SoilAssessment, SoilHealth,
    SoilReading,
};

use crate::config::ModelConfig;
use crate::error::{AppError, AppResult};
use crate::ml::{dataset, ForestParameters, RandomForest, StandardScaler};

/// Soil-health analyzer holding the trained (scaler, classifier) pair.
///
/// Constructed once at startup and shared read-only across requests; it is
/// never retrained on live traffic.
pub struct SoilAnalyzer {
    scaler: StandardScaler,
    forest: RandomForest,
}

impl SoilAnalyzer {
    /// Two-state initialization: load both artifacts when they exist at the
    /// configured paths, otherwise train from synthetic data and persist
    /// them for future processes. Any failure here is fatal at startup.
    pub fn initialize(config: &ModelConfig) -> AppResult<Self> {
        let classifier_path = Path::new(&config.classifier_path);
        let scaler_path = Path::new(&config.scaler_path);

        if classifier_path.exists() && scaler_path.exists() {
            tracing::info!(
                classifier = %classifier_path.display(),
                scaler = %scaler_path.display(),
                "Loading persisted soil-health artifacts"
            );
            Self::load(classifier_path, scaler_path)
        } else {
            tracing::info!("No persisted artifacts found, training soil-health classifier");
            let analyzer = Self::train(dataset::DEFAULT_SAMPLE_COUNT, &ForestParameters::default());
            analyzer.persist(classifier_path, scaler_path)?;
            Ok(analyzer)
        }
    }

    /// Load a previously persisted (scaler, classifier) pair verbatim
    fn load(classifier_path: &Path, scaler_path: &Path) -> AppResult<Self> {
        let forest = read_artifact(classifier_path)?;
        let scaler = read_artifact(scaler_path)?;
        Ok(Self { scaler, forest })
    }

    /// Fit the scaler on raw features and the forest on scaled features
    fn train(sample_count: usize, params: &ForestParameters) -> Self {
        let samples = dataset::generate_training_data(sample_count, dataset::TRAINING_SEED);

        let rows: Vec<_> = samples.iter().map(|(features, _)| *features).collect();
        let labels: Vec<_> = samples
            .iter()
            .map(|(_, label)| label.class_index())
            .collect();

        let scaler = StandardScaler::fit(&rows);
        let scaled = scaler.transform_all(&rows);
        let forest = RandomForest::fit(&scaled, &labels, params);

        tracing::info!(
            samples = sample_count,
            trees = forest.n_trees(),
            "Trained soil-health classifier"
        );

        Self { scaler, forest }
    }

    /// Write both artifacts to their configured paths
    fn persist(&self, classifier_path: &Path, scaler_path: &Path) -> AppResult<()> {
        write_artifact(classifier_path, &self.forest)?;
        write_artifact(scaler_path, &self.scaler)?;
        tracing::info!(
            classifier = %classifier_path.display(),
            scaler = %scaler_path.display(),
            "Persisted soil-health artifacts"
        );
        Ok(())
    }

    /// Classify one reading. The six raw inputs are scaled in fixed field
    /// order before the forest votes.
    pub fn predict(&self, reading: &SoilReading) -> SoilHealth {
        let scaled = self.scaler.transform(&reading.features());
        SoilHealth::from_class_index(self.forest.predict(&scaled))
    }

    /// Full assessment: classifier label, nutrient statuses, advisory text
    /// and soil-based crop suggestions.
    pub fn analyze(&self, reading: &SoilReading) -> SoilAssessment {
        let soil_health = self.predict(reading);
        let nutrient_status = assess_nutrients(reading);
        let recommendations = nutrient_recommendations(&nutrient_status);
        let crops = suitable_crops(reading, soil_health);

        SoilAssessment {
            soil_health,
            recommendations,
            nutrient_status,
            suitable_crops: crops,
        }
    }
}

fn read_artifact<T: serde::de::DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::ModelArtifact(format!("failed to read {}: {}", path.display(), e)))?;
    serde_json::from_str(&raw)
        .map_err(|e| AppError::ModelArtifact(format!("failed to parse {}: {}", path.display(), e)))
}

fn write_artifact<T: serde::Serialize>(path: &Path, artifact: &T) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::ModelArtifact(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }
    }

    let raw = serde_json::to_string(artifact)
        .map_err(|e| AppError::ModelArtifact(format!("failed to serialize artifact: {}", e)))?;
    fs::write(path, raw)
        .map_err(|e| AppError::ModelArtifact(format!("failed to write {}: {}", path.display(), e)))
}
