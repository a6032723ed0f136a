//! Risk scoring integration tests
//!
//! Exercises both scoring strategies end to end over the shared domain
//! model: the historical cap, the flood/heatwave step functions, level
//! threshold boundaries and the forward-looking fractional scorer.

use proptest::prelude::*;
use shared::{
    DisasterType, ForecastScorer, HistoricalScorer, OutlookLevel, Region, RiskLevel, RiskScorer,
    WeatherSnapshot,
};

fn weather(temp: f64, humidity: f64, rainfall: f64) -> WeatherSnapshot {
    WeatherSnapshot {
        temperature_celsius: temp,
        humidity_percent: humidity,
        precipitation_mm: rainfall,
        daily: None,
    }
}

fn region_with_floods(count: u32) -> Region {
    Region::new("Test Region", 20.0, 80.0).with_history(count, 0, 0)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;
    use shared::DailyForecast;

    /// Historical contribution is min(3H, 30): the cap activates at exactly
    /// ten recorded events
    #[test]
    fn test_historical_cap_activates_at_ten_events() {
        let scorer = HistoricalScorer::new(DisasterType::Flood);
        let calm = weather(25.0, 60.0, 0.0);

        let at_nine = scorer.assess(&region_with_floods(9), &calm);
        let at_ten = scorer.assess(&region_with_floods(10), &calm);
        let at_eleven = scorer.assess(&region_with_floods(11), &calm);

        assert_eq!(at_nine.percentage, 27.0 * 0.4);
        assert_eq!(at_ten.percentage, 30.0 * 0.4);
        assert_eq!(at_eleven.percentage, at_ten.percentage);
    }

    /// Flood weather risk step function over the rainfall bands
    #[test]
    fn test_flood_rainfall_steps() {
        let scorer = HistoricalScorer::new(DisasterType::Flood);
        let region = region_with_floods(0);

        let cases = [
            (0.0, 0.0),
            (15.0, 10.0),
            (25.0, 20.0),
            (60.0, 35.0),
            (150.0, 50.0),
            // Boundaries stay in the lower band
            (10.0, 0.0),
            (20.0, 10.0),
            (50.0, 20.0),
            (100.0, 35.0),
        ];
        for (rainfall, weather_risk) in cases {
            let score = scorer.assess(&region, &weather(25.0, 60.0, rainfall));
            assert_eq!(
                score.percentage,
                weather_risk * 0.6,
                "rainfall {} mm",
                rainfall
            );
        }
    }

    /// Heatwave temperature steps plus the dry-air bonus
    #[test]
    fn test_heatwave_temperature_steps() {
        let scorer = HistoricalScorer::new(DisasterType::Heatwave);
        let region = Region::new("Test Region", 20.0, 80.0);

        let cases = [(25.0, 0.0), (32.0, 10.0), (38.0, 20.0), (43.0, 35.0), (47.0, 50.0)];
        for (temp, weather_risk) in cases {
            let score = scorer.assess(&region, &weather(temp, 60.0, 0.0));
            assert_eq!(score.percentage, weather_risk * 0.6, "temp {}", temp);
        }

        // Dryness bonus applies only below 30% humidity, capped at 15
        let dry = scorer.assess(&region, &weather(47.0, 20.0, 0.0));
        assert_eq!(dry.percentage, (50.0 + 5.0) * 0.6);
        let parched = scorer.assess(&region, &weather(47.0, 0.0, 0.0));
        assert_eq!(parched.percentage, (50.0 + 15.0) * 0.6);
    }

    /// Earthquake weather risk is a flat base rate regardless of conditions
    #[test]
    fn test_earthquake_flat_weather_risk() {
        let scorer = HistoricalScorer::new(DisasterType::Earthquake);
        let region = Region::new("Test Region", 20.0, 80.0);

        let monsoon = scorer.assess(&region, &weather(28.0, 95.0, 120.0));
        let scorching = scorer.assess(&region, &weather(48.0, 10.0, 0.0));
        assert_eq!(monsoon.percentage, 5.0 * 0.6);
        assert_eq!(monsoon.percentage, scorching.percentage);
    }

    /// Bihar with 15 recorded floods and calm weather scores exactly 12.0 LOW
    #[test]
    fn test_bihar_calm_weather_baseline() {
        let bihar = Region::new("Bihar", 25.5941, 85.1376).with_history(15, 5, 1);
        let score =
            HistoricalScorer::new(DisasterType::Flood).assess(&bihar, &weather(25.0, 60.0, 0.0));

        assert_eq!(score.percentage, 12.0);
        assert_eq!(score.level, RiskLevel::Low);
    }

    /// Risk level thresholds are closed at the lower edge
    #[test]
    fn test_level_thresholds() {
        assert_eq!(RiskLevel::from_percentage(75.0), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_percentage(74.999), RiskLevel::High);
        assert_eq!(RiskLevel::from_percentage(50.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_percentage(25.0), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_percentage(24.999), RiskLevel::Low);
    }

    fn outlook_weather(precipitation: Vec<f64>, temp_max: Vec<f64>) -> WeatherSnapshot {
        WeatherSnapshot {
            daily: Some(DailyForecast {
                precipitation_sum_mm: precipitation,
                temperature_max_celsius: temp_max,
            }),
            ..WeatherSnapshot::default()
        }
    }

    /// Equal flood and heat risk resolves the primary disaster to heatwave
    #[test]
    fn test_outlook_tie_prefers_heatwave() {
        let region = Region::new("Test Region", 20.0, 80.0);
        // Both risks come out to exactly 0.5
        let snapshot = outlook_weather(vec![75.0, 0.0, 0.0], vec![39.0]);
        let outlook = ForecastScorer.assess(&region, &snapshot);

        assert_eq!(outlook.flood_risk, outlook.heat_risk);
        assert_eq!(outlook.primary_disaster, DisasterType::Heatwave);
        // Exactly 0.5 stays MEDIUM under the strict threshold
        assert_eq!(outlook.level, OutlookLevel::Medium);
    }

    /// Missing daily series scores as dry days and current temperature
    #[test]
    fn test_outlook_missing_series_defaults() {
        let region = Region::new("Test Region", 20.0, 80.0);
        let snapshot = weather(25.0, 60.0, 0.0);
        let outlook = ForecastScorer.assess(&region, &snapshot);

        assert_eq!(outlook.rainfall_72h_mm, 0.0);
        assert_eq!(outlook.max_temp_7d_celsius, 25.0);
        assert_eq!(outlook.flood_risk, 0.0);
        // (25 - 35) / 8: cool forecasts score negative by design of the
        // original formula
        assert!(outlook.heat_risk < 0.0);
    }

    /// Outlook level thresholds are strict inequalities
    #[test]
    fn test_outlook_thresholds_strict() {
        assert_eq!(OutlookLevel::from_score(0.80), OutlookLevel::High);
        assert_eq!(OutlookLevel::from_score(0.8000001), OutlookLevel::Extreme);
        assert_eq!(OutlookLevel::from_score(0.50), OutlookLevel::Medium);
        assert_eq!(OutlookLevel::from_score(0.20), OutlookLevel::Low);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for plausible temperatures
    fn temperature_strategy() -> impl Strategy<Value = f64> {
        -10.0..55.0f64
    }

    /// Strategy for humidity percentages
    fn humidity_strategy() -> impl Strategy<Value = f64> {
        0.0..=100.0f64
    }

    /// Strategy for rainfall amounts
    fn rainfall_strategy() -> impl Strategy<Value = f64> {
        0.0..300.0f64
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Historical contribution never exceeds its 30-point cap
        #[test]
        fn prop_historical_component_capped(history in 0u32..100) {
            let calm = weather(25.0, 60.0, 0.0);
            let score = HistoricalScorer::new(DisasterType::Flood)
                .assess(&region_with_floods(history), &calm);

            // weather risk is zero here, so only the capped historical
            // component remains
            prop_assert!(score.percentage <= 30.0 * 0.4);
            prop_assert_eq!(
                score.percentage,
                f64::min(f64::from(history) * 3.0, 30.0) * 0.4
            );
        }

        /// Confidence grows linearly with history and has no upper bound
        #[test]
        fn prop_confidence_linear_in_history(history in 0u32..100) {
            let calm = weather(25.0, 60.0, 0.0);
            let score = HistoricalScorer::new(DisasterType::Flood)
                .assess(&region_with_floods(history), &calm);

            prop_assert_eq!(score.confidence, 0.75 + f64::from(history) / 20.0);
        }

        /// The percentage is always within its designed bounds
        #[test]
        fn prop_percentage_bounded(
            history in 0u32..50,
            temp in temperature_strategy(),
            humidity in humidity_strategy(),
            rainfall in rainfall_strategy()
        ) {
            for disaster in DisasterType::ALL {
                let region = Region::new("R", 20.0, 80.0)
                    .with_history(history, history, history);
                let score = HistoricalScorer::new(disaster)
                    .assess(&region, &weather(temp, humidity, rainfall));

                prop_assert!(score.percentage >= 0.0);
                // 30 historical + 65 weather, weighted 0.4/0.6
                prop_assert!(score.percentage <= 30.0 * 0.4 + 65.0 * 0.6);
            }
        }

        /// The level mapping is monotonic in the percentage
        #[test]
        fn prop_level_monotonic(a in 0.0..100.0f64, b in 0.0..100.0f64) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(RiskLevel::from_percentage(lo) <= RiskLevel::from_percentage(hi));
        }

        /// More rainfall never lowers the flood score
        #[test]
        fn prop_flood_score_monotonic_in_rainfall(
            rain_lo in rainfall_strategy(),
            rain_hi in rainfall_strategy(),
            humidity in humidity_strategy()
        ) {
            let (lo, hi) = if rain_lo <= rain_hi { (rain_lo, rain_hi) } else { (rain_hi, rain_lo) };
            let region = region_with_floods(5);
            let scorer = HistoricalScorer::new(DisasterType::Flood);

            let score_lo = scorer.assess(&region, &weather(25.0, humidity, lo));
            let score_hi = scorer.assess(&region, &weather(25.0, humidity, hi));
            prop_assert!(score_lo.percentage <= score_hi.percentage);
        }

        /// Flood risk fraction is capped at 1.0 and never negative
        #[test]
        fn prop_outlook_flood_risk_bounded(r1 in rainfall_strategy(), r2 in rainfall_strategy(), r3 in rainfall_strategy()) {
            let region = Region::new("R", 20.0, 80.0);
            let snapshot = WeatherSnapshot {
                daily: Some(shared::DailyForecast {
                    precipitation_sum_mm: vec![r1, r2, r3],
                    temperature_max_celsius: vec![30.0],
                }),
                ..WeatherSnapshot::default()
            };
            let outlook = ForecastScorer.assess(&region, &snapshot);

            prop_assert!(outlook.flood_risk >= 0.0);
            prop_assert!(outlook.flood_risk <= 1.0);
        }

        /// The primary disaster always carries the max of the two risks
        #[test]
        fn prop_outlook_primary_is_max(
            rainfall in rainfall_strategy(),
            temp_max in temperature_strategy()
        ) {
            let region = Region::new("R", 20.0, 80.0);
            let snapshot = WeatherSnapshot {
                daily: Some(shared::DailyForecast {
                    precipitation_sum_mm: vec![rainfall, 0.0, 0.0],
                    temperature_max_celsius: vec![temp_max],
                }),
                ..WeatherSnapshot::default()
            };
            let outlook = ForecastScorer.assess(&region, &snapshot);

            prop_assert_eq!(outlook.score, f64::max(outlook.flood_risk, outlook.heat_risk));
            if outlook.primary_disaster == DisasterType::Flood {
                prop_assert!(outlook.flood_risk > outlook.heat_risk);
            } else {
                prop_assert!(outlook.heat_risk >= outlook.flood_risk);
            }
        }
    }
}
