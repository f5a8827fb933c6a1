use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfirmEmailRequest {
    pub email: String,

    /// Token from the verification link. Accepted but not checked against a
    /// stored value; confirmation is keyed by email.
    #[serde(default)]
    pub token: Option<String>,
}
