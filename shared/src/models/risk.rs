//! Risk scoring for disaster prediction
//!
//! Two scoring strategies exist behind the [`RiskScorer`] trait. The
//! historical scorer blends a region's past event record with current
//! weather into a 0-100 percentage. The forecast scorer looks only at the
//! multi-day forecast series and produces a fractional 0-1 score. They use
//! different thresholds and output scales and are deliberately kept apart.

use serde::{Deserialize, Serialize};

use crate::models::region::{DisasterType, Region};
use crate::models::weather::WeatherSnapshot;

/// Qualitative level for the historical (percentage) scorer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Moderate => "MODERATE",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        };
        f.write_str(s)
    }
}

impl RiskLevel {
    /// Map a 0-100 risk percentage to a level. Thresholds are closed at
    /// the lower edge: 75.0 is already CRITICAL, 74.999 is HIGH.
    pub fn from_percentage(total_risk: f64) -> Self {
        if total_risk >= 75.0 {
            RiskLevel::Critical
        } else if total_risk >= 50.0 {
            RiskLevel::High
        } else if total_risk >= 25.0 {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }
}

/// Qualitative level for the forecast (fractional) scorer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum OutlookLevel {
    Low,
    Medium,
    High,
    Extreme,
}

impl std::fmt::Display for OutlookLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OutlookLevel::Low => "LOW",
            OutlookLevel::Medium => "MEDIUM",
            OutlookLevel::High => "HIGH",
            OutlookLevel::Extreme => "EXTREME",
        };
        f.write_str(s)
    }
}

impl OutlookLevel {
    /// Map a 0-1 fractional score to a level. Thresholds are strict:
    /// a score of exactly 0.80 is HIGH, not EXTREME.
    pub fn from_score(score: f64) -> Self {
        if score > 0.80 {
            OutlookLevel::Extreme
        } else if score > 0.50 {
            OutlookLevel::High
        } else if score > 0.20 {
            OutlookLevel::Medium
        } else {
            OutlookLevel::Low
        }
    }
}

/// Assessment produced by the historical scorer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskScore {
    /// Combined risk on a 0-100 scale. The caps on both components keep
    /// the achievable maximum below 100.
    pub percentage: f64,
    pub level: RiskLevel,
    /// Grows with the size of the historical record and is not capped, so
    /// it exceeds 1.0 for regions with more than five recorded events.
    pub confidence: f64,
}

/// Assessment produced by the forecast scorer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outlook {
    pub primary_disaster: DisasterType,
    pub flood_risk: f64,
    /// Not clamped at zero: cool forecasts score negative.
    pub heat_risk: f64,
    /// max(flood_risk, heat_risk)
    pub score: f64,
    pub level: OutlookLevel,
    pub rainfall_72h_mm: f64,
    pub max_temp_7d_celsius: f64,
}

/// Common capability interface for the two scoring strategies. Both are
/// pure and synchronous; neither performs I/O.
pub trait RiskScorer {
    type Assessment;

    fn assess(&self, region: &Region, weather: &WeatherSnapshot) -> Self::Assessment;
}

/// Strategy blending historical event counts with current weather
#[derive(Debug, Clone, Copy)]
pub struct HistoricalScorer {
    disaster: DisasterType,
}

impl HistoricalScorer {
    pub fn new(disaster: DisasterType) -> Self {
        Self { disaster }
    }

    /// Weather contribution on a 0-65 scale, per disaster type
    fn weather_risk(&self, weather: &WeatherSnapshot) -> f64 {
        let temp = weather.temperature_celsius;
        let humidity = weather.humidity_percent;
        let rainfall = weather.precipitation_mm;

        match self.disaster {
            DisasterType::Flood => {
                // Rainfall is the primary factor (0-50)
                let mut risk = if rainfall > 100.0 {
                    50.0
                } else if rainfall > 50.0 {
                    35.0
                } else if rainfall > 20.0 {
                    20.0
                } else if rainfall > 10.0 {
                    10.0
                } else {
                    0.0
                };
                // High humidity bonus (0-10)
                if humidity > 80.0 {
                    risk += f64::min(10.0, (humidity - 80.0) / 2.0);
                }
                risk
            }
            DisasterType::Heatwave => {
                // Temperature is the primary factor (0-50)
                let mut risk = if temp > 45.0 {
                    50.0
                } else if temp > 40.0 {
                    35.0
                } else if temp > 35.0 {
                    20.0
                } else if temp > 30.0 {
                    10.0
                } else {
                    0.0
                };
                // Dry air bonus (0-15)
                if humidity < 30.0 {
                    risk += f64::min(15.0, (30.0 - humidity) / 2.0);
                }
                risk
            }
            // Weather is not predictive for earthquakes; flat base rate
            DisasterType::Earthquake => 5.0,
        }
    }
}

impl RiskScorer for HistoricalScorer {
    type Assessment = RiskScore;

    fn assess(&self, region: &Region, weather: &WeatherSnapshot) -> RiskScore {
        let history = region.event_count(self.disaster);

        // Historical frequency contributes at most 30 points
        let historical_risk = f64::min(f64::from(history) * 3.0, 30.0);
        let weather_risk = self.weather_risk(weather);

        let percentage = historical_risk * 0.4 + weather_risk * 0.6;
        let confidence = 0.75 + f64::from(history) / 20.0;

        RiskScore {
            percentage,
            level: RiskLevel::from_percentage(percentage),
            confidence,
        }
    }
}

/// Rainfall over 72 hours that saturates the flood score
const FLOOD_SATURATION_MM: f64 = 150.0;
/// Temperature where the heat score starts climbing
const HEAT_BASELINE_CELSIUS: f64 = 35.0;
/// Degrees above baseline that saturate the heat score
const HEAT_SATURATION_SPAN: f64 = 8.0;

/// Strategy scoring the short-range forecast series, with no historical
/// component
#[derive(Debug, Clone, Copy, Default)]
pub struct ForecastScorer;

impl RiskScorer for ForecastScorer {
    type Assessment = Outlook;

    fn assess(&self, _region: &Region, weather: &WeatherSnapshot) -> Outlook {
        let rainfall_72h = weather.rainfall_72h_mm();
        let max_temp = weather.max_temp_7d_celsius();

        let flood_risk = f64::min(rainfall_72h / FLOOD_SATURATION_MM, 1.0);
        let heat_risk = f64::min(
            (max_temp - HEAT_BASELINE_CELSIUS) / HEAT_SATURATION_SPAN,
            1.0,
        );

        // Ties resolve to heatwave
        let primary_disaster = if flood_risk > heat_risk {
            DisasterType::Flood
        } else {
            DisasterType::Heatwave
        };
        let score = f64::max(flood_risk, heat_risk);

        Outlook {
            primary_disaster,
            flood_risk,
            heat_risk,
            score,
            level: OutlookLevel::from_score(score),
            rainfall_72h_mm: rainfall_72h,
            max_temp_7d_celsius: max_temp,
        }
    }
}
