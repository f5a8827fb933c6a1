pub mod auth;
pub mod check_email_query;
pub mod confirm_email_request;
pub mod confirm_email_response;
pub mod login_request;
pub mod message_response;
pub mod refresh_token_request;
pub mod refresh_token_response;
pub mod register_request;
pub mod resend_confirmation_request;
pub mod session_response;
pub mod user_dto;
