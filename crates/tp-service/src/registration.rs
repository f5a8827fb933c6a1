/// Validated registration input.
///
/// Boundary validation (email format, password length, non-empty roles)
/// happens before this struct is built; the service re-checks only the
/// invariants it owns, such as the role cap.
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub roles: Vec<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
}
