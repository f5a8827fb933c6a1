use crate::api::error::{ApiError, Result as ApiResult};

use tp_service::Registration;

use serde::Deserialize;

/// Shortest password the platform accepts.
const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,

    pub password: String,

    /// Roles to register for, e.g. ["student"] or ["teacher"]
    pub roles: Vec<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub surname: Option<String>,
}

impl RegisterRequest {
    /// Boundary validation; invariants owned by the domain (role cap,
    /// duplicate roles) are checked further down.
    pub fn validate(&self) -> ApiResult<()> {
        if !is_well_formed_email(&self.email) {
            return Err(ApiError::validation(
                "email must be a valid address",
                Some("email".into()),
            ));
        }

        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(ApiError::validation(
                format!("password must be at least {} characters", MIN_PASSWORD_LEN),
                Some("password".into()),
            ));
        }

        if self.roles.is_empty() {
            return Err(ApiError::validation(
                "at least one role is required",
                Some("roles".into()),
            ));
        }

        if let Some(ref name) = self.name {
            if contains_markup(name) {
                return Err(ApiError::validation(
                    "name cannot contain markup",
                    Some("name".into()),
                ));
            }
        }

        if let Some(ref surname) = self.surname {
            if contains_markup(surname) {
                return Err(ApiError::validation(
                    "surname cannot contain markup",
                    Some("surname".into()),
                ));
            }
        }

        Ok(())
    }

    pub fn into_registration(self) -> Registration {
        Registration {
            email: self.email,
            password: self.password,
            roles: self.roles,
            name: self.name,
            surname: self.surname,
        }
    }
}

/// Lightweight shape check: one '@', non-empty local part, dotted domain.
pub fn is_well_formed_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.split_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Display names are rendered in HTML contexts; reject angle brackets.
pub fn contains_markup(value: &str) -> bool {
    value.contains('<') || value.contains('>')
}
