//! Forecast API client for fetching weather data
//!
//! Integrates with the Open-Meteo forecast API for current conditions and
//! the daily precipitation/temperature series. A single attempt is made per
//! request, bounded by a timeout; callers decide whether a failure defaults
//! or propagates.

use reqwest::Client;
use serde::Deserialize;
use shared::{DailyForecast, WeatherSnapshot};

use crate::config::ForecastConfig;
use crate::error::{AppError, AppResult};

/// Fields requested for current conditions
const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,precipitation";
/// Fields requested for the daily series
const DAILY_FIELDS: &str = "precipitation_sum,temperature_2m_max";

/// Forecast API client
#[derive(Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
    timezone: String,
    forecast_days: u8,
}

/// Open-Meteo forecast response
#[derive(Debug, Deserialize)]
struct OMForecastResponse {
    current: Option<OMCurrent>,
    daily: Option<OMDaily>,
}

#[derive(Debug, Deserialize)]
struct OMCurrent {
    temperature_2m: Option<f64>,
    relative_humidity_2m: Option<f64>,
    precipitation: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OMDaily {
    precipitation_sum: Option<Vec<Option<f64>>>,
    temperature_2m_max: Option<Vec<Option<f64>>>,
}

impl ForecastClient {
    /// Create a new ForecastClient
    pub fn new(config: &ForecastConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            timezone: config.timezone.clone(),
            forecast_days: config.forecast_days,
        }
    }

    /// Create a new ForecastClient with custom base URL (for testing)
    pub fn with_base_url(config: &ForecastConfig, base_url: String) -> Self {
        Self {
            base_url,
            ..Self::new(config)
        }
    }

    /// Fetch current conditions by GPS coordinates. Fields missing from a
    /// successful response fall back to the default snapshot values.
    pub async fn fetch_current(&self, latitude: f64, longitude: f64) -> AppResult<WeatherSnapshot> {
        let data = self.fetch(latitude, longitude, false).await?;
        Ok(Self::convert_response(data))
    }

    /// Fetch current conditions plus the daily series by GPS coordinates
    pub async fn fetch_daily(&self, latitude: f64, longitude: f64) -> AppResult<WeatherSnapshot> {
        let data = self.fetch(latitude, longitude, true).await?;
        Ok(Self::convert_response(data))
    }

    async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
        with_daily: bool,
    ) -> AppResult<OMForecastResponse> {
        let url = format!("{}/v1/forecast", self.base_url);
        let mut request = self.client.get(&url).query(&[
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("current", CURRENT_FIELDS.to_string()),
            ("timezone", self.timezone.clone()),
        ]);
        if with_daily {
            request = request.query(&[
                ("daily", DAILY_FIELDS.to_string()),
                ("forecast_days", self.forecast_days.to_string()),
            ]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::ForecastUnavailable(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ForecastUnavailable(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ForecastUnavailable(format!("failed to parse response: {}", e)))
    }

    /// Convert an Open-Meteo response to our snapshot format, defaulting
    /// any missing field
    fn convert_response(data: OMForecastResponse) -> WeatherSnapshot {
        let defaults = WeatherSnapshot::default();
        let current = data.current;

        let daily = data.daily.map(|d| DailyForecast {
            // Null entries in the series count as dry days
            precipitation_sum_mm: d
                .precipitation_sum
                .unwrap_or_default()
                .into_iter()
                .map(|v| v.unwrap_or(0.0))
                .collect(),
            temperature_max_celsius: d
                .temperature_2m_max
                .unwrap_or_default()
                .into_iter()
                .flatten()
                .collect(),
        });

        WeatherSnapshot {
            temperature_celsius: current
                .as_ref()
                .and_then(|c| c.temperature_2m)
                .unwrap_or(defaults.temperature_celsius),
            humidity_percent: current
                .as_ref()
                .and_then(|c| c.relative_humidity_2m)
                .unwrap_or(defaults.humidity_percent),
            precipitation_mm: current
                .as_ref()
                .and_then(|c| c.precipitation)
                .unwrap_or(defaults.precipitation_mm),
            daily,
        }
    }
}
