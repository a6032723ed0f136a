//! India Disaster Risk Prediction Platform - Backend Server
//!
//! Estimates flood, heatwave and earthquake risk per Indian state by
//! combining historical event records with live weather data, and serves
//! the assessments over an HTTP API.

use axum::Router;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use config::Config;

use external::{ForecastClient, InferenceClient};
use services::RegionRegistry;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub registry: Arc<RegionRegistry>,
    pub forecast: ForecastClient,
    pub inference: InferenceClient,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "drp_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Disaster Risk Prediction Server");
    tracing::info!("Environment: {}", config.environment);

    let registry = RegionRegistry::new();
    tracing::info!("Region registry loaded with {} regions", registry.len());

    let forecast = ForecastClient::new(&config.forecast);
    let inference = InferenceClient::new(&config.inference);

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        registry: Arc::new(registry),
        forecast,
        inference,
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes::api_routes()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
