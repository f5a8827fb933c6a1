use crate::{CredentialService, Mailer};

use tp_auth::TokenIssuer;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state handed to HTTP handlers.
///
/// Collaborators are constructed once at process start and injected here;
/// handlers build a per-request [`CredentialService`] over the shared pool.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub tokens: Arc<TokenIssuer>,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(pool: SqlitePool, tokens: Arc<TokenIssuer>, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            pool,
            tokens,
            mailer,
        }
    }

    pub fn credentials(&self) -> CredentialService {
        CredentialService::new(self.pool.clone(), self.tokens.clone(), self.mailer.clone())
    }
}
