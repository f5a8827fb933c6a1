use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ResendConfirmationRequest {
    pub email: String,
}
