use tp_core::{Identity, RoleSet};

/// A syntactically valid bcrypt digest; repository tests never verify it.
pub const FAKE_DIGEST: &str = "$2b$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";

pub fn student_identity(email: &str) -> Identity {
    let roles = RoleSet::try_new(&["student".to_string()]).unwrap();
    Identity::new(
        email.to_string(),
        FAKE_DIGEST.to_string(),
        roles,
        Some("Jo".to_string()),
        Some("Do".to_string()),
    )
}
