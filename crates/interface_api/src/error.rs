//! API error handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, info};

use domain_hazard::orchestrator::SERVER_NOT_CONFIGURED;
use domain_hazard::{LookupError, UpstreamService};

pub const ADDRESS_NOT_FOUND: &str = "Address not found.";
pub const COORDINATES_REQUIRED: &str = "Latitude and longitude are required.";
pub const GEOCODING_FAILED: &str = "Geocoding request failed.";
pub const LAVA_ZONE_FAILED: &str = "Lava zone lookup failed.";
pub const INVALID_BODY: &str = "Request body must be a JSON object.";

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server not configured")]
    NotConfigured,

    #[error("Bad gateway: {0}")]
    BadGateway(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::NotConfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "not_configured",
                SERVER_NOT_CONFIGURED.to_string(),
            ),
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, "bad_gateway", msg),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::Configuration => {
                error!("ARCGIS_API_KEY is not configured");
                ApiError::NotConfigured
            }
            LookupError::Validation(msg) => {
                debug!(reason = %msg, "Rejected request input");
                ApiError::BadRequest(COORDINATES_REQUIRED.to_string())
            }
            LookupError::NotFound => {
                info!("Geocoder returned no candidates");
                ApiError::NotFound(ADDRESS_NOT_FOUND.to_string())
            }
            LookupError::Upstream { service, .. } => ApiError::BadGateway(
                match service {
                    UpstreamService::Geocoder => GEOCODING_FAILED,
                    UpstreamService::HazardZones => LAVA_ZONE_FAILED,
                }
                .to_string(),
            ),
        }
    }
}

/// The rejection detail is logged, never returned
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        debug!(reason = %rejection.body_text(), "Rejected request body");
        ApiError::BadRequest(INVALID_BODY.to_string())
    }
}
