//! Business logic services for the Agro Advisory Platform

pub mod crops;
pub mod disease;
pub mod soil;

pub use crops::CropAdvisoryService;
pub use disease::DiseaseService;
pub use soil::SoilAnalyzer;
