//! Role tags held by an identity.
//!
//! Roles form an open vocabulary ("student", "teacher", "admin", ...) but an
//! identity never holds more than [`MAX_ROLES`] of them. Roles are only ever
//! added, never removed.

use crate::{CoreError, Result as CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Maximum number of roles a single identity may hold.
pub const MAX_ROLES: usize = 2;

/// An ordered, deduplicated set of role tags.
///
/// Insertion order is preserved so that responses list roles in the order
/// they were acquired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet(Vec<String>);

impl RoleSet {
    /// Build the initial role set for a brand-new identity.
    ///
    /// Equivalent to accumulating the request onto an empty set, so the same
    /// rejection rules apply: an empty request fails as `DuplicateRole` and
    /// more than [`MAX_ROLES`] distinct roles fail as `TooManyRoles`.
    #[track_caller]
    pub fn try_new(requested: &[String]) -> CoreResult<Self> {
        Self::empty().accumulate(requested)
    }

    /// Merge requested roles into this set, enforcing the role-cap invariant.
    ///
    /// Rejection order matters: the duplicate check runs before the count
    /// check, so a full set receiving only already-held roles fails as
    /// `DuplicateRole`, not `TooManyRoles`.
    #[track_caller]
    pub fn accumulate(&self, requested: &[String]) -> CoreResult<Self> {
        for role in requested {
            if role.trim().is_empty() {
                return Err(CoreError::Validation {
                    message: "role tags cannot be empty".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        let mut new_roles: Vec<String> = Vec::new();
        for role in requested {
            if !self.contains(role) && !new_roles.contains(role) {
                new_roles.push(role.clone());
            }
        }

        if new_roles.is_empty() {
            return Err(CoreError::DuplicateRole {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.0.len() + new_roles.len() > MAX_ROLES {
            return Err(CoreError::TooManyRoles {
                max: MAX_ROLES,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut merged = self.0.clone();
        merged.extend(new_roles);
        Ok(Self(merged))
    }

    fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn contains(&self, role: &str) -> bool {
        self.0.iter().any(|r| r == role)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }
}

impl From<RoleSet> for Vec<String> {
    fn from(roles: RoleSet) -> Self {
        roles.0
    }
}
