//! Weather snapshot models

use serde::{Deserialize, Serialize};

/// Current conditions for a coordinate pair, one per request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
    pub precipitation_mm: f64,
    /// Short-range daily series, present only when the forecast endpoint
    /// was queried with daily fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily: Option<DailyForecast>,
}

impl Default for WeatherSnapshot {
    /// Values substituted when the forecast service is unreachable or
    /// returns partial data
    fn default() -> Self {
        Self {
            temperature_celsius: 25.0,
            humidity_percent: 60.0,
            precipitation_mm: 0.0,
            daily: None,
        }
    }
}

/// Daily forecast series, up to seven days
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyForecast {
    pub precipitation_sum_mm: Vec<f64>,
    pub temperature_max_celsius: Vec<f64>,
}

impl WeatherSnapshot {
    /// Total precipitation over the next 72 hours, from the first three
    /// entries of the daily series. A missing series sums to zero.
    pub fn rainfall_72h_mm(&self) -> f64 {
        self.daily
            .as_ref()
            .map(|d| d.precipitation_sum_mm.iter().take(3).sum())
            .unwrap_or(0.0)
    }

    /// Maximum daily temperature over the next seven days. Falls back to
    /// the current temperature when the series is missing or empty.
    pub fn max_temp_7d_celsius(&self) -> f64 {
        self.daily
            .as_ref()
            .map(|d| &d.temperature_max_celsius[..])
            .filter(|s| !s.is_empty())
            .map(|s| s.iter().take(7).copied().fold(f64::NEG_INFINITY, f64::max))
            .unwrap_or(self.temperature_celsius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_values() {
        let snapshot = WeatherSnapshot::default();
        assert_eq!(snapshot.temperature_celsius, 25.0);
        assert_eq!(snapshot.humidity_percent, 60.0);
        assert_eq!(snapshot.precipitation_mm, 0.0);
        assert!(snapshot.daily.is_none());
    }

    #[test]
    fn test_rainfall_72h_sums_first_three_days() {
        let snapshot = WeatherSnapshot {
            daily: Some(DailyForecast {
                precipitation_sum_mm: vec![10.0, 20.0, 30.0, 99.0],
                temperature_max_celsius: vec![],
            }),
            ..WeatherSnapshot::default()
        };
        assert_eq!(snapshot.rainfall_72h_mm(), 60.0);
        assert_eq!(WeatherSnapshot::default().rainfall_72h_mm(), 0.0);
    }

    #[test]
    fn test_max_temp_7d_falls_back_to_current() {
        let mut snapshot = WeatherSnapshot {
            temperature_celsius: 31.5,
            ..WeatherSnapshot::default()
        };
        assert_eq!(snapshot.max_temp_7d_celsius(), 31.5);

        snapshot.daily = Some(DailyForecast {
            precipitation_sum_mm: vec![],
            temperature_max_celsius: vec![36.0, 41.0, 39.0, 40.0, 38.0, 37.0, 42.0, 55.0],
        });
        // Eighth entry is beyond the seven-day window
        assert_eq!(snapshot.max_temp_7d_celsius(), 42.0);
    }
}
