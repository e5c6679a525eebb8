//! Domain models for the Agro Advisory Platform

mod crop;
mod disease;
mod soil;
mod weather;

pub use crop::*;
pub use disease::*;
pub use soil::*;
pub use weather::*;
