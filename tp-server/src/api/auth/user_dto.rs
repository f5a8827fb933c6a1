use tp_service::UserSummary;

use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    pub roles: Vec<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub is_email_confirmed: bool,
}

impl From<UserSummary> for UserDto {
    fn from(user: UserSummary) -> Self {
        Self {
            id: user.id,
            email: user.email,
            roles: user.roles,
            name: user.name,
            surname: user.surname,
            is_email_confirmed: user.is_email_confirmed,
        }
    }
}
