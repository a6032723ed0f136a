//! Business logic services for the Disaster Risk Prediction Platform

pub mod advisory;
pub mod prediction;
pub mod registry;

pub use prediction::PredictionService;
pub use registry::RegionRegistry;
