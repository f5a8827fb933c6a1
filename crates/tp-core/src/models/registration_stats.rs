use serde::{Deserialize, Serialize};

/// Registration tallies over a reporting window.
///
/// A multi-role account counts once per role it holds, so the per-role
/// numbers may sum to more than the number of accounts created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationStats {
    pub new_students: i64,
    pub new_teachers: i64,
    pub confirmed_emails: i64,
}
