//! HTTP handlers for the Disaster Risk Prediction Platform

pub mod health;
pub mod meta;
pub mod predict;

pub use health::*;
pub use meta::*;
pub use predict::*;
