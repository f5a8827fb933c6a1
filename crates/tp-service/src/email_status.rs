use serde::Serialize;

/// Result of an existence lookup on an email address. Read-only; carries role
/// and confirmation detail only when the identity exists.
#[derive(Debug, Clone, Serialize)]
pub struct EmailStatus {
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_email_confirmed: Option<bool>,
}

impl EmailStatus {
    pub fn absent() -> Self {
        Self {
            exists: false,
            roles: None,
            is_email_confirmed: None,
        }
    }
}
