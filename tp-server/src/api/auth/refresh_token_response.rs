use tp_auth::RefreshedAccess;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RefreshTokenResponse {
    pub access_token: String,
    /// Access token lifetime in seconds
    pub expires_in: u64,
}

impl From<RefreshedAccess> for RefreshTokenResponse {
    fn from(refreshed: RefreshedAccess) -> Self {
        Self {
            access_token: refreshed.access_token,
            expires_in: refreshed.expires_in,
        }
    }
}
