use tp_core::BasicInfo;

use serde::Serialize;
use uuid::Uuid;

/// Public profile projection; no email, no account flags beyond confirmation
#[derive(Debug, Serialize)]
pub struct UserInfoResponse {
    pub id: Uuid,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub roles: Vec<String>,
    pub is_email_confirmed: bool,
}

impl From<BasicInfo> for UserInfoResponse {
    fn from(info: BasicInfo) -> Self {
        Self {
            id: info.id,
            name: info.name,
            surname: info.surname,
            roles: info.roles.to_vec(),
            is_email_confirmed: info.is_email_confirmed,
        }
    }
}
