//! Identity entity - a registered person's durable record.

use crate::RoleSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user.
///
/// The email is the natural lookup key and is unique across all identities
/// (case-sensitive, stored exactly as supplied). The password is only ever
/// held as a one-way digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub roles: RoleSet,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub is_active: bool,
    pub is_email_confirmed: bool,
    /// Optimistic locking version, bumped on every persisted update
    pub version: i32,
    pub created_at: DateTime<Utc>,
}

impl Identity {
    /// Create a new identity with default lifecycle state.
    ///
    /// New identities start active and unconfirmed; confirmation requires an
    /// explicit `confirm_email` transition.
    pub fn new(
        email: String,
        password_hash: String,
        roles: RoleSet,
        name: Option<String>,
        surname: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            roles,
            name,
            surname,
            is_active: true,
            is_email_confirmed: false,
            version: 1,
            created_at: Utc::now(),
        }
    }

    /// Mark the email address as confirmed.
    ///
    /// Returns true when this call performed the transition, false when the
    /// identity was already confirmed. The flag never reverts to false.
    pub fn confirm_email(&mut self) -> bool {
        if self.is_email_confirmed {
            return false;
        }
        self.is_email_confirmed = true;
        true
    }
}
