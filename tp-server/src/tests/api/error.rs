use crate::ApiError;

use tp_service::ServiceError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Identity not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Identity not found");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "password too short".into(),
        field: Some("password".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "password");
}

#[tokio::test]
async fn test_conflict_returns_409_with_duplicate_email_code() {
    let error = ApiError::Conflict {
        message: "Email already registered: a@x.com".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "DUPLICATE_EMAIL");
}

#[tokio::test]
async fn test_unauthorized_carries_its_code() {
    let error = ApiError::Unauthorized {
        code: "INVALID_TOKEN".into(),
        message: "Invalid or expired token".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Internal server error".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_duplicate_role_maps_to_bad_request_code() {
    let service_err = ServiceError::DuplicateRole {
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = service_err.into();

    match api_err {
        ApiError::BadRequest { code, .. } => assert_eq!(code, "DUPLICATE_ROLE"),
        _ => panic!("Expected BadRequest error"),
    }
}

#[test]
fn test_too_many_roles_maps_to_role_limit_code() {
    let service_err = ServiceError::TooManyRoles {
        max: 2,
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = service_err.into();

    match api_err {
        ApiError::BadRequest { code, message, .. } => {
            assert_eq!(code, "ROLE_LIMIT_EXCEEDED");
            assert!(message.contains('2'));
        }
        _ => panic!("Expected BadRequest error"),
    }
}

#[test]
fn test_internal_service_error_message_is_not_echoed() {
    let service_err = ServiceError::Internal {
        message: "bcrypt worker exploded".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = service_err.into();

    match api_err {
        ApiError::Internal { message, .. } => {
            assert!(!message.contains("bcrypt"));
        }
        _ => panic!("Expected Internal error"),
    }
}
