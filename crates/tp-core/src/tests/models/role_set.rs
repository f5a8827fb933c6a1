use crate::{CoreError, RoleSet};

fn roles(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

#[test]
fn given_fresh_identity_when_one_role_requested_then_set_holds_it() {
    let set = RoleSet::try_new(&roles(&["student"])).unwrap();

    assert_eq!(set.as_slice(), roles(&["student"]));
    assert!(set.contains("student"));
}

#[test]
fn given_fresh_identity_when_two_roles_requested_then_both_held() {
    let set = RoleSet::try_new(&roles(&["student", "teacher"])).unwrap();

    assert_eq!(set.len(), 2);
    assert!(set.contains("student"));
    assert!(set.contains("teacher"));
}

#[test]
fn given_fresh_identity_when_three_roles_requested_then_too_many_roles() {
    let result = RoleSet::try_new(&roles(&["student", "teacher", "admin"]));

    assert!(matches!(result, Err(CoreError::TooManyRoles { .. })));
}

#[test]
fn given_held_role_when_requested_again_then_duplicate_role() {
    let set = RoleSet::try_new(&roles(&["student"])).unwrap();

    let result = set.accumulate(&roles(&["student"]));

    assert!(matches!(result, Err(CoreError::DuplicateRole { .. })));
}

#[test]
fn given_one_role_when_second_accumulated_then_order_preserved() {
    let set = RoleSet::try_new(&roles(&["student"])).unwrap();

    let merged = set.accumulate(&roles(&["teacher"])).unwrap();

    assert_eq!(merged.as_slice(), roles(&["student", "teacher"]));
}

#[test]
fn given_two_roles_when_third_accumulated_then_too_many_roles() {
    let set = RoleSet::try_new(&roles(&["student", "teacher"])).unwrap();

    let result = set.accumulate(&roles(&["admin"]));

    assert!(matches!(result, Err(CoreError::TooManyRoles { .. })));
}

#[test]
fn given_full_set_when_only_held_roles_requested_then_duplicate_before_count() {
    // The duplicate check runs before the count check, so a full set fed only
    // roles it already holds rejects as DuplicateRole
    let set = RoleSet::try_new(&roles(&["student", "teacher"])).unwrap();

    let result = set.accumulate(&roles(&["student", "teacher"]));

    assert!(matches!(result, Err(CoreError::DuplicateRole { .. })));
}

#[test]
fn given_repeated_tag_in_request_when_accumulated_then_deduplicated() {
    let set = RoleSet::try_new(&roles(&["student", "student"])).unwrap();

    assert_eq!(set.as_slice(), roles(&["student"]));
}

#[test]
fn given_empty_role_tag_when_accumulated_then_validation_error() {
    let result = RoleSet::try_new(&roles(&["student", ""]));

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_empty_request_when_accumulated_then_duplicate_role() {
    let set = RoleSet::try_new(&roles(&["student"])).unwrap();

    let result = set.accumulate(&[]);

    assert!(matches!(result, Err(CoreError::DuplicateRole { .. })));
}
