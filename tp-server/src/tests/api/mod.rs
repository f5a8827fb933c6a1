mod auth;
mod error;
