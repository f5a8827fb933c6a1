use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ConfirmEmailResponse {
    pub confirmed: bool,
}
