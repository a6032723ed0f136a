//! Configuration management for the Disaster Risk Prediction Platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with DRP_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Forecast API configuration
    pub forecast: ForecastConfig,

    /// Generative inference API configuration
    pub inference: InferenceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ForecastConfig {
    /// Forecast API base URL
    pub base_url: String,

    /// Timezone hint sent with every forecast request
    pub timezone: String,

    /// Outbound request timeout in seconds
    pub timeout_secs: u64,

    /// Number of days requested for the daily series
    pub forecast_days: u8,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InferenceConfig {
    /// Text generation API endpoint
    pub endpoint: String,

    /// Bearer token for the inference API. The default is a placeholder;
    /// requests made with it fail and the advisory fallback takes over.
    pub api_token: String,

    /// Outbound request timeout in seconds
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("DRP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 8000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("forecast.base_url", "https://api.open-meteo.com")?
            .set_default("forecast.timezone", "Asia/Kolkata")?
            .set_default("forecast.timeout_secs", 10)?
            .set_default("forecast.forecast_days", 7)?
            .set_default(
                "inference.endpoint",
                "https://api-inference.huggingface.co/models/google/flan-t5-large",
            )?
            .set_default("inference.api_token", "hf_placeholder_token")?
            .set_default("inference.timeout_secs", 10)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (DRP_ prefix)
            .add_source(
                Environment::with_prefix("DRP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".to_string(),
        }
    }
}
