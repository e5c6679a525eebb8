//! Shared types and models for the Agro Advisory Platform
//!
//! This crate contains the domain types and rule logic shared between the
//! backend and other components of the system: soil readings and nutrient
//! rules, crop suitability scoring, and leaf-disease classes.

pub mod models;

pub use models::*;
