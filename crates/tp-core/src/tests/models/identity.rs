use crate::{Identity, RoleSet};

fn student_identity() -> Identity {
    let roles = RoleSet::try_new(&["student".to_string()]).unwrap();
    Identity::new(
        "a@x.com".to_string(),
        "$2b$10$fakedigestfakedigestfakedigest".to_string(),
        roles,
        Some("Jo".to_string()),
        Some("Do".to_string()),
    )
}

#[test]
fn test_identity_new_defaults() {
    let identity = student_identity();

    assert_eq!(identity.email, "a@x.com");
    assert!(identity.is_active);
    assert!(!identity.is_email_confirmed);
    assert_eq!(identity.version, 1);
    assert_eq!(identity.roles.as_slice(), ["student".to_string()]);
}

#[test]
fn test_confirm_email_transitions_once() {
    let mut identity = student_identity();

    assert!(identity.confirm_email());
    assert!(identity.is_email_confirmed);
}

#[test]
fn test_confirm_email_is_idempotent() {
    let mut identity = student_identity();

    assert!(identity.confirm_email());
    // Second confirm is a no-op, flag stays true
    assert!(!identity.confirm_email());
    assert!(identity.is_email_confirmed);
}
