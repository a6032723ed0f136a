//! Route definitions for the Disaster Risk Prediction Platform

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // System banner and health (public)
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        // Static listings
        .route("/regions", get(handlers::list_regions))
        .route("/disasters", get(handlers::list_disasters))
        // Historical-weighted predictions
        .route("/predict/:region", get(handlers::predict_region))
        .route("/all", get(handlers::predict_all_regions))
        // Forward-looking outlooks
        .route("/outlook", get(handlers::outlook_all_regions))
        .route("/outlook/:region", get(handlers::outlook_region))
}
