//! Error handling for the Disaster Risk Prediction Platform
//!
//! Provides consistent JSON error responses across all endpoints

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Region not found: {0}")]
    RegionNotFound(String),

    #[error("Unknown disaster type: {0}")]
    UnknownDisasterType(String),

    // External service errors
    #[error("Forecast service unavailable: {0}")]
    ForecastUnavailable(String),

    #[error("Inference service error: {0}")]
    InferenceError(String),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::RegionNotFound(region) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "REGION_NOT_FOUND".to_string(),
                    message: format!("Region '{}' not found", region),
                },
            ),
            AppError::UnknownDisasterType(name) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "UNKNOWN_DISASTER_TYPE".to_string(),
                    message: format!(
                        "Unknown disaster type '{}', expected one of: flood, heatwave, earthquake",
                        name
                    ),
                },
            ),
            AppError::ForecastUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "FORECAST_SERVICE_UNAVAILABLE".to_string(),
                    message: format!("Forecast service is temporarily unavailable: {}", msg),
                },
            ),
            AppError::InferenceError(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "INFERENCE_ERROR".to_string(),
                    message: format!("Inference service error: {}", msg),
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

impl From<shared::UnknownDisasterType> for AppError {
    fn from(err: shared::UnknownDisasterType) -> Self {
        AppError::UnknownDisasterType(err.0)
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
