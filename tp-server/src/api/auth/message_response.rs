use serde::Serialize;

/// Generic acknowledgement body for fire-and-forget operations
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
