// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for the finder core and HTTP layer

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every failure the finder can report to a caller
/// Each variant maps to an HTTP status code and error code for the JSON API
#[derive(Error, Debug)]
pub enum FinderError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Region could not be resolved: {0}")]
    RegionNotFound(String),

    #[error("External API error: {0}")]
    ExternalApiError(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl FinderError {
    /// Stable machine-readable code used in the JSON error body
    pub fn error_code(&self) -> &'static str {
        match self {
            FinderError::ValidationError(_) => "VALIDATION_ERROR",
            FinderError::RegionNotFound(_) => "REGION_NOT_FOUND",
            FinderError::ExternalApiError(_) => "EXTERNAL_API_ERROR",
            FinderError::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            FinderError::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }
}

/// Convert FinderError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for FinderError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            FinderError::ValidationError(_) => StatusCode::BAD_REQUEST,
            FinderError::RegionNotFound(_) => StatusCode::NOT_FOUND,
            FinderError::ExternalApiError(_) => StatusCode::BAD_GATEWAY,
            FinderError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            FinderError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
