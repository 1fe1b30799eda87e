use async_trait::async_trait;

use crate::auth::credentials::CredentialStore;
use crate::auth::service::AuthService;
use crate::auth::session::SessionRegistry;
use crate::error::AppError;
use crate::validation::{validate_password, validate_username};

pub struct DefaultAuth {
    credentials: CredentialStore,
    sessions: SessionRegistry,
}

impl DefaultAuth {
    pub fn new(credentials: CredentialStore, sessions: SessionRegistry) -> Self {
        Self {
            credentials,
            sessions,
        }
    }
}

#[async_trait]
impl AuthService for DefaultAuth {
    async fn register(&self, username: &str, password: &str) -> Result<(), AppError> {
        validate_username(username)?;
        validate_password(password)?;
        self.credentials.register(username, password).await
    }

    async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        // the login response never distinguishes a missing user from a
        // wrong password
        if username.is_empty() || password.is_empty() {
            return Err(AppError::InvalidCredentials);
        }
        if !self.credentials.verify(username, password).await {
            return Err(AppError::InvalidCredentials);
        }
        self.sessions.create_session(username).await
    }

    async fn resolve(&self, token: &str) -> Result<Option<String>, AppError> {
        self.sessions.resolve(token).await
    }

    async fn purge_expired(&self) -> Result<usize, AppError> {
        self.sessions.purge_expired().await
    }
}
