//! Handlers for the banner and static listing endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use shared::DisasterType;

use crate::AppState;

#[derive(Serialize)]
pub struct BannerResponse {
    pub service: String,
    pub version: String,
    pub environment: String,
    pub regions: usize,
}

/// Root endpoint: system banner with environment and region count
pub async fn root(State(state): State<AppState>) -> Json<BannerResponse> {
    Json(BannerResponse {
        service: "India Disaster Risk Prediction API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.clone(),
        regions: state.registry.len(),
    })
}

#[derive(Serialize)]
pub struct RegionsResponse {
    pub regions: Vec<String>,
}

/// List registered region names in registration order
pub async fn list_regions(State(state): State<AppState>) -> Json<RegionsResponse> {
    Json(RegionsResponse {
        regions: state.registry.names(),
    })
}

#[derive(Serialize)]
pub struct DisastersResponse {
    pub disasters: Vec<&'static str>,
}

/// List supported disaster types
pub async fn list_disasters() -> Json<DisastersResponse> {
    Json(DisastersResponse {
        disasters: DisasterType::ALL.iter().map(|d| d.as_str()).collect(),
    })
}
