//! Mail delivery collaborator.
//!
//! The service only needs one capability: sending a verification email with
//! a confirmation token. Delivery failures are non-fatal to registration, so
//! the trait stays narrow and transport-agnostic.

use async_trait::async_trait;
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("Mail delivery failed: {message} {location}")]
    Delivery {
        message: String,
        location: ErrorLocation,
    },
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_verification_email(&self, to: &str, token: &str) -> Result<(), MailError>;
}

/// Mailer that logs the verification link instead of delivering it.
///
/// Stands in for a real transport in development and tests; the link format
/// matches what the frontend's verify-email page expects.
pub struct LogMailer {
    verification_base_url: String,
    from: String,
}

impl LogMailer {
    pub fn new(verification_base_url: String, from: String) -> Self {
        Self {
            verification_base_url,
            from,
        }
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send_verification_email(&self, to: &str, token: &str) -> Result<(), MailError> {
        log::info!(
            "Verification email from {} to {}: {}?token={}",
            self.from,
            to,
            self.verification_base_url,
            token
        );
        Ok(())
    }
}
