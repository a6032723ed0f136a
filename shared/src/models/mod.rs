//! Domain models for the India Disaster Risk Prediction Platform

mod region;
mod risk;
mod weather;

pub use region::*;
pub use risk::*;
pub use weather::*;
