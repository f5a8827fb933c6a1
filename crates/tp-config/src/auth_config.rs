use crate::{ConfigError, ConfigErrorResult, MIN_JWT_SECRET_BYTES};

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Shared HS256 signing secret. Required; also settable via TP_JWT_SECRET.
    pub jwt_secret: Option<String>,
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.jwt_secret {
            None => Err(ConfigError::auth(
                "auth.jwt_secret is required (config.toml or TP_JWT_SECRET)",
            )),
            Some(ref secret) if secret.len() < MIN_JWT_SECRET_BYTES => {
                Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} bytes",
                    MIN_JWT_SECRET_BYTES
                )))
            }
            Some(_) => Ok(()),
        }
    }
}
