use crate::api::auth::user_dto::UserDto;

use tp_service::Session;

use serde::Serialize;

/// Successful register/login response: identity snapshot plus bearer tokens
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: UserDto,
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds
    pub expires_in: u64,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            user: session.user.into(),
            access_token: session.tokens.access_token,
            refresh_token: session.tokens.refresh_token,
            expires_in: session.tokens.expires_in,
        }
    }
}
