use crate::{AuthError, Claims, Result as AuthErrorResult};

use tp_core::Identity;

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// Access token lifetime: 15 minutes.
pub const ACCESS_TOKEN_TTL_SECS: i64 = 900;

/// Refresh token lifetime: 7 days.
pub const REFRESH_TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Bearer tokens returned by register and login.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds
    pub expires_in: u64,
}

/// A fresh access token minted from a still-valid refresh token.
#[derive(Debug, Clone)]
pub struct RefreshedAccess {
    pub access_token: String,
    pub expires_in: u64,
}

/// Signs, verifies, and refreshes identity-bearing JWTs (HS256).
///
/// Tokens are stateless: there is no revocation list, so a refresh token
/// stays valid until expiry regardless of later password or role changes.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenIssuer {
    /// Create an issuer over a shared HS256 secret.
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 30; // 30 second clock skew tolerance

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Sign an access/refresh token pair for an identity.
    ///
    /// Both tokens carry the same claim set; only the expiries differ.
    #[track_caller]
    pub fn issue(&self, identity: &Identity) -> AuthErrorResult<TokenPair> {
        let now = chrono::Utc::now().timestamp();

        let access_claims = self.claims_for(identity, now, ACCESS_TOKEN_TTL_SECS);
        let refresh_claims = self.claims_for(identity, now, REFRESH_TOKEN_TTL_SECS);

        Ok(TokenPair {
            access_token: self.sign(&access_claims)?,
            refresh_token: self.sign(&refresh_claims)?,
            expires_in: ACCESS_TOKEN_TTL_SECS as u64,
        })
    }

    /// Verify a token's signature and expiry and return its claims.
    ///
    /// Every failure mode (bad signature, malformed payload, expired)
    /// collapses into a single `InvalidToken` rejection; the underlying
    /// reason is logged but never surfaced to the caller.
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                log::debug!("Token verification failed: {}", e);
                AuthError::InvalidToken {
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        token_data.claims.validate().map_err(|e| {
            log::debug!("Token claim validation failed: {}", e);
            AuthError::InvalidToken {
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(token_data.claims)
    }

    /// Exchange a valid refresh token for a fresh access token.
    ///
    /// The new token repeats the claims frozen at original issuance; current
    /// identity state is not re-read from storage.
    #[track_caller]
    pub fn refresh(&self, refresh_token: &str) -> AuthErrorResult<RefreshedAccess> {
        let claims = self.verify(refresh_token)?;

        let now = chrono::Utc::now().timestamp();
        let access_claims = Claims {
            iat: now,
            exp: now + ACCESS_TOKEN_TTL_SECS,
            ..claims
        };

        Ok(RefreshedAccess {
            access_token: self.sign(&access_claims)?,
            expires_in: ACCESS_TOKEN_TTL_SECS as u64,
        })
    }

    fn claims_for(&self, identity: &Identity, now: i64, ttl_secs: i64) -> Claims {
        Claims {
            sub: identity.id.to_string(),
            email: identity.email.clone(),
            roles: identity.roles.to_vec(),
            name: identity.name.clone(),
            surname: identity.surname.clone(),
            iat: now,
            exp: now + ttl_secs,
        }
    }

    #[track_caller]
    fn sign(&self, claims: &Claims) -> AuthErrorResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            AuthError::Signing {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
