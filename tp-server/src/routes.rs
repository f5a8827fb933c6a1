use crate::api::auth::auth::{
    check_email, confirm_email, login, refresh_token, register, resend_confirmation,
};
use crate::api::users::users::{get_user, get_user_stats};
use crate::health;

use tp_service::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Credential endpoints
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/refresh-token", post(refresh_token))
        .route("/api/v1/auth/confirm-email", post(confirm_email))
        .route("/api/v1/auth/resend-confirmation", post(resend_confirmation))
        .route("/api/v1/auth/check-email", get(check_email))
        // User endpoints (the static stats segment wins over the id capture)
        .route("/api/v1/users/stats", get(get_user_stats))
        .route("/api/v1/users/{id}", get(get_user))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Add shared state
        .with_state(state)
        // CORS middleware (the signup frontend runs on its own origin)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
