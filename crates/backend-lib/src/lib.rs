// ============================
// crates/backend-lib/src/lib.rs
// ============================
//! Core service logic for the stash per-owner storage server.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod storage;
pub mod validation;

use std::sync::Arc;

use crate::auth::{AuthService, CredentialStore, DefaultAuth, SessionRegistry};
use crate::config::Settings;
use crate::error::AppError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState<S> {
    /// Authentication service
    pub auth: Arc<dyn AuthService>,
    /// Settings
    pub settings: Arc<Settings>,
    /// Per-owner blob storage
    pub storage: S,
}

impl<S> AppState<S> {
    /// Create the application state, opening both persisted auth stores
    /// under the configured data directory.
    pub fn new(storage: S, settings: Settings) -> Result<Self, AppError> {
        let credentials = CredentialStore::open(settings.data_dir.join("credentials.json"))?;
        let sessions = SessionRegistry::open(
            settings.data_dir.join("sessions.json"),
            settings.session_ttl_secs,
        )?;
        let auth: Arc<dyn AuthService> = Arc::new(DefaultAuth::new(credentials, sessions));

        Ok(Self {
            auth,
            settings: Arc::new(settings),
            storage,
        })
    }
}
