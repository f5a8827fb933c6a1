use tp_auth::TokenPair;
use tp_core::Identity;

use serde::Serialize;
use uuid::Uuid;

/// Identity snapshot returned alongside freshly issued tokens.
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub email: String,
    pub roles: Vec<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub is_email_confirmed: bool,
}

impl From<&Identity> for UserSummary {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id,
            email: identity.email.clone(),
            roles: identity.roles.to_vec(),
            name: identity.name.clone(),
            surname: identity.surname.clone(),
            is_email_confirmed: identity.is_email_confirmed,
        }
    }
}

/// Successful register/login outcome: who you are plus bearer tokens.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: UserSummary,
    pub tokens: TokenPair,
}
