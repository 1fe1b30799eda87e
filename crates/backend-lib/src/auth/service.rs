use async_trait::async_trait;

use crate::error::AppError;

/// Seam between the HTTP layer and the credential/session stores.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Create a credential for a new user.
    async fn register(&self, username: &str, password: &str) -> Result<(), AppError>;
    /// Verify credentials and mint a session token.
    async fn login(&self, username: &str, password: &str) -> Result<String, AppError>;
    /// Resolve a bearer token to the username it authenticates.
    async fn resolve(&self, token: &str) -> Result<Option<String>, AppError>;
    /// Drop expired sessions; returns how many were removed.
    async fn purge_expired(&self) -> Result<usize, AppError>;
}
