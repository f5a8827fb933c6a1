//! Credential and session lifecycle orchestration.
//!
//! Entry point for register/login/refresh/confirm flows. Registration is
//! create-or-update keyed by email: the first call creates the identity, any
//! later call for the same address can only accumulate roles and refresh the
//! display attributes. The read-modify-write span on the update path runs
//! under the repository's optimistic version check and retries on conflict,
//! so concurrent registrations cannot silently drop a role.
//!
//! Confirmation is keyed by email alone; the emailed token is not checked
//! against a stored value. Known hardening gap, kept for parity with the
//! platform's frontend contract.

use crate::{
    EmailStatus, Mailer, Registration, Result as ServiceResult, ServiceError, Session, UserSummary,
};

use tp_auth::{PasswordHasher, RefreshedAccess, TokenIssuer};
use tp_core::{BasicInfo, Identity, RegistrationStats, RoleSet};
use tp_db::{DbError, UserRepository};

use std::panic::Location;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use log::{info, warn};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Attempts for an optimistically locked read-modify-write span before
/// giving up on contention.
const SAVE_RETRY_LIMIT: usize = 3;

pub struct CredentialService {
    repo: UserRepository,
    hasher: PasswordHasher,
    tokens: Arc<TokenIssuer>,
    mailer: Arc<dyn Mailer>,
}

impl CredentialService {
    pub fn new(pool: SqlitePool, tokens: Arc<TokenIssuer>, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            repo: UserRepository::new(pool),
            hasher: PasswordHasher::new(),
            tokens,
            mailer,
        }
    }

    /// Register a new identity, or accumulate roles onto an existing one.
    ///
    /// Always issues tokens on success; email confirmation is informational
    /// and never gates registration. The verification email is fired for
    /// unconfirmed identities and a delivery failure is logged, not fatal.
    pub async fn register(&self, registration: Registration) -> ServiceResult<Session> {
        info!(
            "Register attempt for: {} [{}]",
            registration.email,
            registration.roles.join(", ")
        );

        let identity = match self.repo.find_by_email(&registration.email).await? {
            Some(existing) => self.accumulate_registration(existing, &registration).await?,
            None => match self.create_identity(&registration).await {
                Ok(identity) => identity,
                // Lost the create race: the row exists now, so fall back to
                // the update path like any repeat registration
                Err(ServiceError::DuplicateEmail { .. }) => {
                    let existing = self
                        .repo
                        .find_by_email(&registration.email)
                        .await?
                        .ok_or_else(|| {
                            ServiceError::internal("Identity vanished after duplicate-email race")
                        })?;
                    self.accumulate_registration(existing, &registration).await?
                }
                Err(e) => return Err(e),
            },
        };

        if !identity.is_email_confirmed {
            self.send_confirmation_best_effort(&identity.email).await;
        }

        let tokens = self.tokens.issue(&identity)?;
        info!(
            "Registration complete: {} [{}]",
            identity.email,
            identity.roles.as_slice().join(", ")
        );

        Ok(Session {
            user: UserSummary::from(&identity),
            tokens,
        })
    }

    /// Authenticate by email and password and issue a fresh token pair.
    pub async fn login(&self, email: &str, password: &str) -> ServiceResult<Session> {
        let identity = self.repo.find_by_email(email).await?.ok_or_else(|| {
            warn!("Login failed: no identity for {}", email);
            ServiceError::not_found()
        })?;

        let hasher = self.hasher;
        let candidate = password.to_string();
        let digest = identity.password_hash.clone();
        let matched = tokio::task::spawn_blocking(move || hasher.verify(&candidate, &digest))
            .await
            .map_err(|e| ServiceError::internal(format!("Hash worker failed: {}", e)))?;

        if !matched {
            warn!("Login failed: bad password for {}", email);
            return Err(ServiceError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        info!(
            "Login successful: {} [{}]",
            identity.email,
            identity.roles.as_slice().join(", ")
        );

        let tokens = self.tokens.issue(&identity)?;
        Ok(Session {
            user: UserSummary::from(&identity),
            tokens,
        })
    }

    /// Exchange a refresh token for a fresh access token.
    ///
    /// Claims are frozen at original issuance; the identity store is not
    /// consulted, so role changes surface only after re-login.
    pub async fn refresh_token(&self, refresh_token: &str) -> ServiceResult<RefreshedAccess> {
        Ok(self.tokens.refresh(refresh_token)?)
    }

    /// Mark an email address as confirmed. Idempotent; only the
    /// unconfirmed-to-confirmed transition exists.
    pub async fn confirm_email(&self, email: &str) -> ServiceResult<()> {
        let mut identity = self.repo.find_by_email(email).await?.ok_or_else(|| {
            warn!("Cannot confirm email: no identity for {}", email);
            ServiceError::ConfirmationFailed {
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        for _ in 0..SAVE_RETRY_LIMIT {
            if !identity.confirm_email() {
                info!("Email already confirmed for {}", email);
                return Ok(());
            }

            match self.repo.save(&mut identity).await {
                Ok(()) => {
                    info!("Email confirmed for {}", email);
                    return Ok(());
                }
                Err(DbError::VersionConflict { .. }) => {
                    identity = self.repo.find_by_email(email).await?.ok_or_else(|| {
                        ServiceError::ConfirmationFailed {
                            location: ErrorLocation::from(Location::caller()),
                        }
                    })?;
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(ServiceError::internal(format!(
            "Confirmation contention for {}",
            email
        )))
    }

    /// Existence lookup; read-only, no error case beyond absence.
    pub async fn check_email_exists(&self, email: &str) -> ServiceResult<EmailStatus> {
        match self.repo.find_by_email(email).await? {
            Some(identity) => Ok(EmailStatus {
                exists: true,
                roles: Some(identity.roles.to_vec()),
                is_email_confirmed: Some(identity.is_email_confirmed),
            }),
            None => Ok(EmailStatus::absent()),
        }
    }

    /// Regenerate and send a confirmation token for an unconfirmed identity.
    pub async fn resend_confirmation(&self, email: &str) -> ServiceResult<()> {
        let identity = self
            .repo
            .find_by_email(email)
            .await?
            .ok_or_else(ServiceError::not_found)?;

        if identity.is_email_confirmed {
            info!("Email already confirmed for {}, skipping send", email);
            return Ok(());
        }

        let token = new_confirmation_token();
        self.mailer
            .send_verification_email(email, &token)
            .await
            .map_err(|e| {
                log::error!("Failed to resend confirmation email to {}: {}", email, e);
                ServiceError::internal("Failed to send confirmation email")
            })
    }

    /// Registration tallies for a reporting window, bounds inclusive.
    pub async fn get_registration_stats(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ServiceResult<RegistrationStats> {
        Ok(self.repo.registration_stats(start, end).await?)
    }

    /// Lightweight identity projection; malformed ids read as absent.
    pub async fn get_basic_info(&self, id: &str) -> ServiceResult<BasicInfo> {
        self.repo
            .get_basic_info(id)
            .await?
            .ok_or_else(ServiceError::not_found)
    }

    async fn create_identity(&self, registration: &Registration) -> ServiceResult<Identity> {
        let roles = RoleSet::try_new(&registration.roles)?;

        // Bcrypt at cost 10 is deliberately slow; keep it off the async path
        let hasher = self.hasher;
        let password = registration.password.clone();
        let digest = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| ServiceError::internal(format!("Hash worker failed: {}", e)))??;

        let identity = Identity::new(
            registration.email.clone(),
            digest,
            roles,
            registration.name.clone(),
            registration.surname.clone(),
        );

        self.repo.create(&identity).await?;
        Ok(identity)
    }

    /// Update path for a repeat registration: accumulate roles, refresh the
    /// display attributes, retry the whole span on a version conflict.
    async fn accumulate_registration(
        &self,
        mut existing: Identity,
        registration: &Registration,
    ) -> ServiceResult<Identity> {
        for _ in 0..SAVE_RETRY_LIMIT {
            existing.roles = existing.roles.accumulate(&registration.roles)?;
            existing.name = registration.name.clone();
            existing.surname = registration.surname.clone();

            match self.repo.save(&mut existing).await {
                Ok(()) => return Ok(existing),
                Err(DbError::VersionConflict { .. }) => {
                    warn!(
                        "Concurrent registration for {}, retrying role accumulation",
                        registration.email
                    );
                    existing = self
                        .repo
                        .find_by_email(&registration.email)
                        .await?
                        .ok_or_else(ServiceError::not_found)?;
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(ServiceError::internal(format!(
            "Registration contention for {}",
            registration.email
        )))
    }

    async fn send_confirmation_best_effort(&self, email: &str) {
        let token = new_confirmation_token();
        if let Err(e) = self.mailer.send_verification_email(email, &token).await {
            // Mail trouble never fails a registration
            log::error!("Failed to send confirmation email to {}: {}", email, e);
        } else {
            info!("Confirmation email sent to {}", email);
        }
    }
}

/// Random 128-bit confirmation token, hex encoded. Not persisted; the
/// confirm flow is keyed by email only.
fn new_confirmation_token() -> String {
    Uuid::new_v4().simple().to_string()
}
