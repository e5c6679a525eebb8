//! Error handling for the Agro Advisory Platform
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
    // Client errors
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    // External service errors
    #[error("Weather provider returned {status}: {detail}")]
    WeatherUpstream { status: u16, detail: String },

    #[error("Weather service unavailable: {0}")]
    WeatherUnavailable(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Model artifact errors (fatal at startup)
    #[error("Model artifact error: {0}")]
    ModelArtifact(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
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
            AppError::InvalidImage(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "INVALID_IMAGE".to_string(),
                    message: msg.clone(),
                },
            ),
            AppError::WeatherUpstream { status, detail } => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "WEATHER_UPSTREAM_ERROR".to_string(),
                    message: format!("Weather provider returned {}: {}", status, detail),
                },
            ),
            AppError::WeatherUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "WEATHER_SERVICE_UNAVAILABLE".to_string(),
                    message: format!("Weather service unavailable: {}", msg),
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message: format!("Configuration error: {}", msg),
                },
            ),
            AppError::ModelArtifact(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "MODEL_ARTIFACT_ERROR".to_string(),
                    message: format!("Model artifact error: {}", msg),
                },
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: msg.clone(),
                },
            ),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred".to_string(),
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_image_maps_to_bad_request() {
        let response = AppError::InvalidImage("bad base64".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_weather_upstream_maps_to_bad_gateway() {
        let response = AppError::WeatherUpstream {
            status: 401,
            detail: "invalid api key".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_weather_unavailable_maps_to_service_unavailable() {
        let response =
            AppError::WeatherUnavailable("connection refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
