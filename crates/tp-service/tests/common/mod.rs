#![allow(dead_code)]

use tp_auth::TokenIssuer;
use tp_service::{CredentialService, MailError, Mailer, Registration};

use std::panic::Location;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use error_location::ErrorLocation;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

pub const TEST_SECRET: &[u8] = b"test-secret-that-is-long-enough-for-hs256";

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    tp_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Mailer that records every send instead of delivering.
pub struct RecordingMailer {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Recipient/token pairs in send order.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send_verification_email(&self, to: &str, token: &str) -> Result<(), MailError> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), token.to_string()));
        Ok(())
    }
}

/// Mailer whose every send fails.
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send_verification_email(&self, _to: &str, _token: &str) -> Result<(), MailError> {
        Err(MailError::Delivery {
            message: "smtp unreachable".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// Service wired to an in-memory database, with handles to the shared
/// collaborators for assertions.
pub struct TestHarness {
    pub service: CredentialService,
    pub tokens: Arc<TokenIssuer>,
    pub mailer: Arc<RecordingMailer>,
}

pub async fn harness() -> TestHarness {
    let pool = create_test_pool().await;
    let tokens = Arc::new(TokenIssuer::with_hs256(TEST_SECRET));
    let mailer = Arc::new(RecordingMailer::new());
    let service = CredentialService::new(pool, tokens.clone(), mailer.clone());

    TestHarness {
        service,
        tokens,
        mailer,
    }
}

pub async fn harness_with_mailer(mailer: Arc<dyn Mailer>) -> CredentialService {
    let pool = create_test_pool().await;
    let tokens = Arc::new(TokenIssuer::with_hs256(TEST_SECRET));
    CredentialService::new(pool, tokens, mailer)
}

pub fn registration(email: &str, roles: &[&str]) -> Registration {
    Registration {
        email: email.to_string(),
        password: "secret123".to_string(),
        roles: roles.iter().map(|r| r.to_string()).collect(),
        name: Some("Jo".to_string()),
        surname: Some("Do".to_string()),
    }
}
