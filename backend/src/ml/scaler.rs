//! Zero-mean/unit-variance feature scaling

use serde::{Deserialize, Serialize};

use super::FEATURE_COUNT;

/// Per-feature standardization fitted on a training matrix.
///
/// Uses the population standard deviation; constant features are centered
/// but left unscaled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    means: [f64; FEATURE_COUNT],
    scales: [f64; FEATURE_COUNT],
}

impl StandardScaler {
    /// Fit means and scales on the raw feature rows
    pub fn fit(rows: &[[f64; FEATURE_COUNT]]) -> Self {
        let n = rows.len().max(1) as f64;

        let mut means = [0.0; FEATURE_COUNT];
        for row in rows {
            for (mean, value) in means.iter_mut().zip(row) {
                *mean += value;
            }
        }
        for mean in &mut means {
            *mean /= n;
        }

        let mut scales = [0.0; FEATURE_COUNT];
        for row in rows {
            for (feature, value) in row.iter().enumerate() {
                let delta = value - means[feature];
                scales[feature] += delta * delta;
            }
        }
        for scale in &mut scales {
            *scale = (*scale / n).sqrt();
            if *scale == 0.0 {
                *scale = 1.0;
            }
        }

        Self { means, scales }
    }

    /// Standardize one feature vector
    pub fn transform(&self, features: &[f64; FEATURE_COUNT]) -> [f64; FEATURE_COUNT] {
        let mut scaled = [0.0; FEATURE_COUNT];
        for feature in 0..FEATURE_COUNT {
            scaled[feature] = (features[feature] - self.means[feature]) / self.scales[feature];
        }
        scaled
    }

    /// Standardize a whole matrix
    pub fn transform_all(&self, rows: &[[f64; FEATURE_COUNT]]) -> Vec<[f64; FEATURE_COUNT]> {
        rows.iter().map(|row| self.transform(row)).collect()
    }
}
