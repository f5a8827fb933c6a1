//! Credential REST API handlers
//!
//! Registration, login, token refresh, and the email-confirmation flow.

use crate::{
    ApiResult, CheckEmailQuery, ConfirmEmailRequest, ConfirmEmailResponse, LoginRequest,
    MessageResponse, RefreshTokenRequest, RefreshTokenResponse, RegisterRequest,
    ResendConfirmationRequest, SessionResponse,
};

use tp_service::{AppState, EmailStatus};

use axum::{
    extract::{Query, State},
    Json,
};

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/auth/register
///
/// Create an account, or accumulate a new role onto an existing one.
/// Returns a full session either way.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<Json<SessionResponse>> {
    request.validate()?;

    let session = state
        .credentials()
        .register(request.into_registration())
        .await?;

    Ok(Json(session.into()))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let session = state
        .credentials()
        .login(&request.email, &request.password)
        .await?;

    Ok(Json(session.into()))
}

/// POST /api/v1/auth/refresh-token
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(request): Json<RefreshTokenRequest>,
) -> ApiResult<Json<RefreshTokenResponse>> {
    let refreshed = state
        .credentials()
        .refresh_token(&request.refresh_token)
        .await?;

    Ok(Json(refreshed.into()))
}

/// POST /api/v1/auth/confirm-email
///
/// Idempotent: confirming an already-confirmed address succeeds.
pub async fn confirm_email(
    State(state): State<AppState>,
    Json(request): Json<ConfirmEmailRequest>,
) -> ApiResult<Json<ConfirmEmailResponse>> {
    state.credentials().confirm_email(&request.email).await?;

    Ok(Json(ConfirmEmailResponse { confirmed: true }))
}

/// POST /api/v1/auth/resend-confirmation
pub async fn resend_confirmation(
    State(state): State<AppState>,
    Json(request): Json<ResendConfirmationRequest>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .credentials()
        .resend_confirmation(&request.email)
        .await?;

    Ok(Json(MessageResponse {
        message: "Confirmation email sent".into(),
    }))
}

/// GET /api/v1/auth/check-email?email=
///
/// Existence lookup used by the signup form.
pub async fn check_email(
    State(state): State<AppState>,
    Query(query): Query<CheckEmailQuery>,
) -> ApiResult<Json<EmailStatus>> {
    let status = state.credentials().check_email_exists(&query.email).await?;

    Ok(Json(status))
}
