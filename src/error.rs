use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

pub const MISSING_CREDENTIALS: &str = "API key or Steam ID not configured.";
pub const MISSING_API_KEY: &str = "API key not configured.";
pub const UPSTREAM_FAILURE: &str = "Failed to fetch data from Steam API";

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Custom error type for API endpoints
///
/// Every variant renders as a JSON `ErrorResponse`. Upstream causes are
/// logged here and never returned to the caller.
#[derive(Debug)]
pub enum ApiError {
    /// Server-side secret missing from the environment
    Configuration(&'static str),
    /// Steam Web API call failed (transport error or non-2xx status)
    Upstream(anyhow::Error),
    /// Missing or malformed query parameter
    InvalidQueryParam(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::Configuration(msg) => {
                tracing::error!("Configuration error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.to_string())
            }
            ApiError::Upstream(err) => {
                tracing::warn!("Upstream error: {:#}", err);
                (StatusCode::BAD_GATEWAY, UPSTREAM_FAILURE.to_string())
            }
            ApiError::InvalidQueryParam(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid query parameter: {}", msg),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Upstream(err)
    }
}

impl From<axum::extract::rejection::QueryRejection> for ApiError {
    fn from(rejection: axum::extract::rejection::QueryRejection) -> Self {
        ApiError::InvalidQueryParam(rejection.body_text())
    }
}
