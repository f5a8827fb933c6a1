use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Every requested role is already held {location}")]
    DuplicateRole { location: ErrorLocation },

    #[error("Role limit exceeded: an identity holds at most {max} roles {location}")]
    TooManyRoles { max: usize, location: ErrorLocation },
}

pub type Result<T> = StdResult<T, CoreError>;
