pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{check_email, confirm_email, login, refresh_token, register, resend_confirmation},
        check_email_query::CheckEmailQuery,
        confirm_email_request::ConfirmEmailRequest,
        confirm_email_response::ConfirmEmailResponse,
        login_request::LoginRequest,
        message_response::MessageResponse,
        refresh_token_request::RefreshTokenRequest,
        refresh_token_response::RefreshTokenResponse,
        register_request::RegisterRequest,
        resend_confirmation_request::ResendConfirmationRequest,
        session_response::SessionResponse,
        user_dto::UserDto,
    },
    error::ApiError,
    error::Result as ApiResult,
    users::{
        stats_query::StatsQuery,
        user_info_response::UserInfoResponse,
        user_stats_response::{StatsPeriod, UserStatsResponse},
        users::{get_user, get_user_stats},
    },
};

pub use crate::error::ServerError;
pub use crate::routes::build_router;
