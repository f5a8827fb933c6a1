use crate::{ConfigError, ConfigErrorResult, DEFAULT_MAIL_FROM, DEFAULT_VERIFICATION_BASE_URL};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    /// Base URL the verification link points at; the confirmation token is
    /// appended as a query parameter.
    pub verification_base_url: String,
    pub from: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            verification_base_url: String::from(DEFAULT_VERIFICATION_BASE_URL),
            from: String::from(DEFAULT_MAIL_FROM),
        }
    }
}

impl MailConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.verification_base_url.is_empty() {
            return Err(ConfigError::mail(
                "mail.verification_base_url cannot be empty",
            ));
        }

        Ok(())
    }
}
