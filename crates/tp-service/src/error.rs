//! Service-level error taxonomy.
//!
//! This is the complete set of failures the credential operations surface to
//! callers. Raw storage, hashing, and JWT errors are mapped here before they
//! cross the service boundary; `Internal` stands in for anything unexpected
//! so callers can distinguish domain rejections from infrastructure trouble.

use tp_auth::AuthError;
use tp_core::CoreError;
use tp_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Email already registered: {email} {location}")]
    DuplicateEmail {
        email: String,
        location: ErrorLocation,
    },

    #[error("Every requested role is already held {location}")]
    DuplicateRole { location: ErrorLocation },

    #[error("Role limit exceeded: at most {max} roles per identity {location}")]
    TooManyRoles { max: usize, location: ErrorLocation },

    #[error("Identity not found {location}")]
    NotFound { location: ErrorLocation },

    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Invalid token {location}")]
    InvalidToken { location: ErrorLocation },

    #[error("Email confirmation failed {location}")]
    ConfirmationFailed { location: ErrorLocation },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ServiceError {
    #[track_caller]
    pub fn not_found() -> Self {
        Self::NotFound {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for ServiceError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::DuplicateRole { .. } => Self::DuplicateRole {
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::TooManyRoles { max, .. } => Self::TooManyRoles {
                max,
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::Validation { message, .. } => Self::Validation {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<DbError> for ServiceError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::DuplicateEmail { email, .. } => Self::DuplicateEmail {
                email,
                location: ErrorLocation::from(Location::caller()),
            },
            // Storage details are logged, never surfaced
            other => {
                log::error!("Storage error: {}", other);
                Self::Internal {
                    message: "Storage operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

impl From<AuthError> for ServiceError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidToken { .. } => Self::InvalidToken {
                location: ErrorLocation::from(Location::caller()),
            },
            other => {
                log::error!("Auth engine error: {}", other);
                Self::Internal {
                    message: "Credential engine failure".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
