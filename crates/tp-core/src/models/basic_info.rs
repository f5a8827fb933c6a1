use crate::RoleSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lightweight identity projection served to header/profile widgets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicInfo {
    pub id: Uuid,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub roles: RoleSet,
    pub is_email_confirmed: bool,
}
