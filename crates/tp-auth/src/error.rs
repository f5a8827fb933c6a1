use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Any verification failure: bad signature, malformed payload, expiry.
    /// Callers get one opaque rejection, the detail is only logged.
    #[error("Invalid token {location}")]
    InvalidToken { location: ErrorLocation },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Token signing failed: {message} {location}")]
    Signing {
        message: String,
        location: ErrorLocation,
    },

    #[error("Password hash engine failure: {message} {location}")]
    HashEngine {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, AuthError>;
