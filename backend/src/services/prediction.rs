//! Request orchestration for risk assessments
//!
//! Wires the region registry, forecast client, scorers and advisory
//! selection into the response payloads served by the handlers.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use shared::{
    DisasterType, ForecastScorer, HistoricalScorer, OutlookLevel, Region, RiskLevel, RiskScorer,
    WeatherSnapshot,
};

use crate::error::{AppError, AppResult};
use crate::external::{ForecastClient, InferenceClient};
use crate::services::{advisory, RegionRegistry};

/// Historical-weighted assessment for one region
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub region: String,
    /// Uppercase disaster name, e.g. "FLOOD"
    pub disaster_type: String,
    pub risk_percentage: f64,
    pub risk_level: RiskLevel,
    pub confidence: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
    pub timestamp: String,
    /// True when the forecast service failed and default weather values
    /// were substituted
    pub degraded: bool,
    pub recommendations: Vec<String>,
    pub details: PredictionDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionDetails {
    pub recent_events_in_region: BTreeMap<DisasterType, u32>,
    pub primary_factors: Vec<String>,
}

/// Forward-looking assessment for one region
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlookReport {
    pub region: String,
    /// Uppercase disaster name, e.g. "HEATWAVE"
    pub primary_disaster: String,
    pub risk_score: f64,
    pub risk_level: OutlookLevel,
    pub flood_risk: f64,
    pub heat_risk: f64,
    pub rainfall_72h_mm: f64,
    pub max_temp_7d_celsius: f64,
    pub alert: String,
    pub timestamp: String,
}

/// Orchestrator for single-region and all-region assessments
#[derive(Clone)]
pub struct PredictionService {
    registry: Arc<RegionRegistry>,
    forecast: ForecastClient,
    inference: InferenceClient,
}

impl PredictionService {
    pub fn new(
        registry: Arc<RegionRegistry>,
        forecast: ForecastClient,
        inference: InferenceClient,
    ) -> Self {
        Self {
            registry,
            forecast,
            inference,
        }
    }

    /// Historical-weighted assessment for a single region. Forecast
    /// failures degrade to default weather rather than failing the request.
    pub async fn predict_one(
        &self,
        region_name: &str,
        disaster: DisasterType,
    ) -> AppResult<Prediction> {
        let region = self
            .registry
            .lookup(region_name)
            .ok_or_else(|| AppError::RegionNotFound(region_name.to_string()))?;

        let coords = region.coordinates;
        let (weather, degraded) = match self.forecast.fetch_current(coords.latitude, coords.longitude).await
        {
            Ok(weather) => (weather, false),
            Err(e) => {
                tracing::warn!(
                    region = %region.name,
                    error = %e,
                    "forecast fetch failed, scoring with default weather"
                );
                (WeatherSnapshot::default(), true)
            }
        };

        Ok(Self::assemble_prediction(region, disaster, &weather, degraded))
    }

    fn assemble_prediction(
        region: &Region,
        disaster: DisasterType,
        weather: &WeatherSnapshot,
        degraded: bool,
    ) -> Prediction {
        let score = HistoricalScorer::new(disaster).assess(region, weather);
        let recommendations = advisory::recommendations(disaster, score.level)
            .iter()
            .map(|s| s.to_string())
            .collect();

        Prediction {
            region: region.name.clone(),
            disaster_type: disaster.label().to_string(),
            risk_percentage: round_to(score.percentage, 2),
            risk_level: score.level,
            confidence: round_to(score.confidence, 3),
            temperature: round_to(weather.temperature_celsius, 1),
            humidity: weather.humidity_percent,
            rainfall: round_to(weather.precipitation_mm, 2),
            timestamp: Utc::now().to_rfc3339(),
            degraded,
            recommendations,
            details: PredictionDetails {
                recent_events_in_region: region.history.clone(),
                primary_factors: disaster
                    .primary_factors()
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            },
        }
    }

    /// Historical-weighted assessments for every registered region, sorted
    /// by risk descending. A failed region is logged and skipped, never
    /// aborting the batch.
    pub async fn predict_all(&self, disaster: DisasterType) -> Vec<Prediction> {
        let mut predictions = Vec::with_capacity(self.registry.len());
        for name in self.registry.names() {
            match self.predict_one(&name, disaster).await {
                Ok(prediction) => predictions.push(prediction),
                Err(e) => {
                    tracing::warn!(region = %name, error = %e, "skipping region in batch prediction");
                }
            }
        }
        sort_predictions_descending(&mut predictions);
        predictions
    }

    /// Forward-looking assessment for a single region. Forecast failures
    /// propagate as a service-unavailable error.
    pub async fn outlook_one(&self, region_name: &str) -> AppResult<OutlookReport> {
        let region = self
            .registry
            .lookup(region_name)
            .ok_or_else(|| AppError::RegionNotFound(region_name.to_string()))?;

        let coords = region.coordinates;
        let weather = self
            .forecast
            .fetch_daily(coords.latitude, coords.longitude)
            .await?;

        let outlook = ForecastScorer.assess(region, &weather);
        let alert = advisory::generate_alert(
            &self.inference,
            outlook.primary_disaster,
            outlook.level,
            &region.name,
            outlook.rainfall_72h_mm,
        )
        .await;

        Ok(OutlookReport {
            region: region.name.clone(),
            primary_disaster: outlook.primary_disaster.label().to_string(),
            risk_score: round_to(outlook.score, 3),
            risk_level: outlook.level,
            flood_risk: round_to(outlook.flood_risk, 3),
            heat_risk: round_to(outlook.heat_risk, 3),
            rainfall_72h_mm: round_to(outlook.rainfall_72h_mm, 2),
            max_temp_7d_celsius: round_to(outlook.max_temp_7d_celsius, 1),
            alert,
            timestamp: Utc::now().to_rfc3339(),
        })
    }

    /// Forward-looking assessments for every region, sorted by score
    /// descending. Regions whose forecast fetch fails are excluded.
    pub async fn outlook_all(&self) -> Vec<OutlookReport> {
        let mut reports = Vec::with_capacity(self.registry.len());
        for name in self.registry.names() {
            match self.outlook_one(&name).await {
                Ok(report) => reports.push(report),
                Err(e) => {
                    tracing::warn!(region = %name, error = %e, "skipping region in batch outlook");
                }
            }
        }
        sort_outlooks_descending(&mut reports);
        reports
    }
}

/// Sort assessments by risk percentage, highest first
pub fn sort_predictions_descending(predictions: &mut [Prediction]) {
    predictions.sort_by(|a, b| {
        b.risk_percentage
            .partial_cmp(&a.risk_percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Sort outlook reports by fractional score, highest first
pub fn sort_outlooks_descending(reports: &mut [OutlookReport]) {
    reports.sort_by(|a, b| {
        b.risk_score
            .partial_cmp(&a.risk_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
