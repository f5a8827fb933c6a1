//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use tp_service::ServiceError;

use std::panic::Location;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Domain rejection (400) with a specific error code
    #[error("Bad request [{code}]: {message} {location}")]
    BadRequest {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    /// Email already registered (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Authentication rejection (401) with a specific error code
    #[error("Unauthorized [{code}]: {message} {location}")]
    Unauthorized {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::BadRequest { code, message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code,
                    message,
                    field: None,
                },
            ),
            ApiError::Conflict { message, .. } => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "DUPLICATE_EMAIL".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Unauthorized { code, message, .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code,
                    message,
                    field: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert service errors to API errors
impl From<ServiceError> for ApiError {
    #[track_caller]
    fn from(e: ServiceError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            ServiceError::DuplicateEmail { email, .. } => ApiError::Conflict {
                message: format!("Email already registered: {}", email),
                location,
            },
            ServiceError::DuplicateRole { .. } => ApiError::BadRequest {
                code: "DUPLICATE_ROLE".into(),
                message: "Every requested role is already held".into(),
                location,
            },
            ServiceError::TooManyRoles { max, .. } => ApiError::BadRequest {
                code: "ROLE_LIMIT_EXCEEDED".into(),
                message: format!("At most {} roles per account", max),
                location,
            },
            ServiceError::ConfirmationFailed { .. } => ApiError::BadRequest {
                code: "CONFIRMATION_FAILED".into(),
                message: "Email confirmation failed".into(),
                location,
            },
            ServiceError::Validation { message, .. } => ApiError::Validation {
                message,
                field: None,
                location,
            },
            ServiceError::NotFound { .. } => ApiError::NotFound {
                message: "Resource not found".into(),
                location,
            },
            ServiceError::InvalidCredentials { .. } => ApiError::Unauthorized {
                code: "INVALID_CREDENTIALS".into(),
                message: "Invalid credentials".into(),
                location,
            },
            ServiceError::InvalidToken { .. } => ApiError::Unauthorized {
                code: "INVALID_TOKEN".into(),
                message: "Invalid or expired token".into(),
                location,
            },
            // Internal details are logged at the service layer, not echoed back
            ServiceError::Internal { .. } => ApiError::Internal {
                message: "Internal server error".into(),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
