use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CheckEmailQuery {
    pub email: String,
}
