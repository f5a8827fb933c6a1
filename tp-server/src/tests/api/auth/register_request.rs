use crate::api::auth::register_request::{contains_markup, is_well_formed_email};
use crate::{ApiError, RegisterRequest};

fn valid_request() -> RegisterRequest {
    RegisterRequest {
        email: "jo@example.com".into(),
        password: "secret123".into(),
        roles: vec!["student".into()],
        name: Some("Jo".into()),
        surname: Some("Doe".into()),
    }
}

#[test]
fn test_valid_request_passes() {
    assert!(valid_request().validate().is_ok());
}

#[test]
fn test_email_without_at_sign_is_rejected() {
    let mut request = valid_request();
    request.email = "jo.example.com".into();

    match request.validate() {
        Err(ApiError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("email")),
        other => panic!("Expected email validation error, got {:?}", other.err()),
    }
}

#[test]
fn test_email_without_domain_dot_is_rejected() {
    let mut request = valid_request();
    request.email = "jo@localhost".into();

    assert!(request.validate().is_err());
}

#[test]
fn test_short_password_is_rejected() {
    let mut request = valid_request();
    request.password = "abc".into();

    match request.validate() {
        Err(ApiError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("password")),
        other => panic!("Expected password validation error, got {:?}", other.err()),
    }
}

#[test]
fn test_empty_roles_are_rejected() {
    let mut request = valid_request();
    request.roles = vec![];

    match request.validate() {
        Err(ApiError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("roles")),
        other => panic!("Expected roles validation error, got {:?}", other.err()),
    }
}

#[test]
fn test_markup_in_name_is_rejected() {
    let mut request = valid_request();
    request.name = Some("<script>alert(1)</script>".into());

    match request.validate() {
        Err(ApiError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("name")),
        other => panic!("Expected name validation error, got {:?}", other.err()),
    }
}

#[test]
fn test_markup_in_surname_is_rejected() {
    let mut request = valid_request();
    request.surname = Some("Do<e".into());

    assert!(request.validate().is_err());
}

#[test]
fn test_absent_names_are_fine() {
    let mut request = valid_request();
    request.name = None;
    request.surname = None;

    assert!(request.validate().is_ok());
}

#[test]
fn test_email_shape_checks() {
    assert!(is_well_formed_email("a@b.co"));
    assert!(is_well_formed_email("first.last@sub.domain.org"));

    assert!(!is_well_formed_email(""));
    assert!(!is_well_formed_email("@b.co"));
    assert!(!is_well_formed_email("a@b@c.co"));
    assert!(!is_well_formed_email("a b@c.co"));
    assert!(!is_well_formed_email("a@.co"));
    assert!(!is_well_formed_email("a@co."));
}

#[test]
fn test_markup_detection() {
    assert!(contains_markup("<b>"));
    assert!(contains_markup("a > b"));
    assert!(!contains_markup("O'Brien-Smith"));
}
