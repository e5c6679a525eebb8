//! HTTP handlers for the Agro Advisory Platform

pub mod crops;
pub mod disease;
pub mod health;
pub mod soil;

pub use crops::*;
pub use disease::*;
pub use health::*;
pub use soil::*;
