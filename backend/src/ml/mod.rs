//! Tabular ML building blocks for the soil-health classifier

pub mod dataset;
pub mod forest;
pub mod scaler;

pub use forest::{ForestParameters, RandomForest};
pub use scaler::StandardScaler;

/// Number of features per soil sample
pub const FEATURE_COUNT: usize = 6;

/// Number of soil-health classes
pub const CLASS_COUNT: usize = 3;
