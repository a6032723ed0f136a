//! Shared types and models for the India Disaster Risk Prediction Platform
//!
//! This crate contains the domain model and the pure risk scoring logic
//! shared between the backend and other components of the system.

pub mod models;
pub mod types;

pub use models::*;
pub use types::*;
