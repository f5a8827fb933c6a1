use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Fixed bcrypt work factor, matching the platform's registration flow.
const BCRYPT_COST: u32 = 10;

/// One-way salted password hashing with constant-time verification.
///
/// The cost factor is deliberately not configurable. Hashing at this cost is
/// expensive on purpose; callers on a latency-sensitive path should offload
/// to a blocking thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password into a salted bcrypt digest.
    ///
    /// Output differs on every call (fresh salt). Only fails on an internal
    /// engine error, which callers should treat as fatal.
    #[track_caller]
    pub fn hash(&self, plaintext: &str) -> AuthErrorResult<String> {
        bcrypt::hash(plaintext, BCRYPT_COST).map_err(|e| AuthError::HashEngine {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Verify a plaintext password against a stored digest.
    ///
    /// Never errors toward the caller: a mismatch or a malformed digest both
    /// come back as false.
    pub fn verify(&self, plaintext: &str, digest: &str) -> bool {
        match bcrypt::verify(plaintext, digest) {
            Ok(matched) => matched,
            Err(e) => {
                log::warn!("Password verification against malformed digest: {}", e);
                false
            }
        }
    }
}
