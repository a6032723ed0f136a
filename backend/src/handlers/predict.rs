//! HTTP handlers for risk prediction endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use shared::DisasterType;

use crate::error::AppResult;
use crate::services::prediction::{OutlookReport, Prediction};
use crate::services::PredictionService;
use crate::AppState;

/// Query parameters for prediction endpoints
#[derive(Debug, Deserialize)]
pub struct DisasterQuery {
    pub disaster_type: Option<String>,
}

impl DisasterQuery {
    /// Parse the disaster type, defaulting to flood when absent
    fn disaster(&self) -> AppResult<DisasterType> {
        match &self.disaster_type {
            Some(name) => Ok(name.parse()?),
            None => Ok(DisasterType::Flood),
        }
    }
}

fn service(state: &AppState) -> PredictionService {
    PredictionService::new(
        state.registry.clone(),
        state.forecast.clone(),
        state.inference.clone(),
    )
}

/// Historical-weighted prediction for a single region
pub async fn predict_region(
    State(state): State<AppState>,
    Path(region): Path<String>,
    Query(query): Query<DisasterQuery>,
) -> AppResult<Json<Prediction>> {
    let disaster = query.disaster()?;
    let prediction = service(&state).predict_one(&region, disaster).await?;
    Ok(Json(prediction))
}

/// Predictions for all regions, sorted by risk descending
pub async fn predict_all_regions(
    State(state): State<AppState>,
    Query(query): Query<DisasterQuery>,
) -> AppResult<Json<Vec<Prediction>>> {
    let disaster = query.disaster()?;
    let predictions = service(&state).predict_all(disaster).await;
    Ok(Json(predictions))
}

/// Forward-looking outlook for a single region
pub async fn outlook_region(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> AppResult<Json<OutlookReport>> {
    let report = service(&state).outlook_one(&region).await?;
    Ok(Json(report))
}

/// Outlooks for all regions, failed regions excluded, sorted by score
/// descending
pub async fn outlook_all_regions(State(state): State<AppState>) -> Json<Vec<OutlookReport>> {
    Json(service(&state).outlook_all().await)
}
