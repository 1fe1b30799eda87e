// ============================
// crates/backend-lib/src/auth/session.rs
// ============================
//! Session issuance, resolution, and expiry.
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs as tokio_fs;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::auth::token::generate_token;
use crate::error::AppError;

/// Default session lifetime in seconds (24 hours)
pub const DEFAULT_SESSION_TTL_SECS: u64 = 60 * 60 * 24;

/// An issued bearer session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Registry of active sessions, persisted as a JSON file keyed by token.
pub struct SessionRegistry {
    path: PathBuf,
    ttl: Duration,
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionRegistry {
    /// Open the registry, loading persisted sessions and dropping any that
    /// have already expired.
    pub fn open<P: AsRef<Path>>(path: P, ttl_secs: u64) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut sessions: HashMap<String, Session> = if path.exists() {
            serde_json::from_str(&fs::read_to_string(&path)?)?
        } else {
            HashMap::new()
        };

        let now = Utc::now();
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(now));
        if sessions.len() < before {
            info!(
                dropped = before - sessions.len(),
                "dropped expired sessions on load"
            );
        }

        Ok(Self {
            path,
            ttl: Duration::seconds(ttl_secs.min(i64::MAX as u64) as i64),
            sessions: RwLock::new(sessions),
        })
    }

    /// Issue a new session for a username and persist the active set.
    pub async fn create_session(&self, username: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let session = Session {
            token: generate_token(),
            username: username.to_string(),
            created_at: now,
            expires_at: now + self.ttl,
        };

        let token = session.token.clone();
        let mut sessions = self.sessions.write().await;
        sessions.insert(token.clone(), session);
        self.persist(&sessions).await?;
        debug!(username, "session created");

        Ok(token)
    }

    /// Resolve a token to the username it authenticates.
    ///
    /// Lookup is exact-match only. An expired session is removed here and
    /// the removal persisted, so the same token can never resolve again.
    pub async fn resolve(&self, token: &str) -> Result<Option<String>, AppError> {
        let mut sessions = self.sessions.write().await;
        match sessions.get(token) {
            Some(session) if session.is_expired(Utc::now()) => {
                sessions.remove(token);
                self.persist(&sessions).await?;
                debug!("expired session removed on access");
                Ok(None)
            },
            Some(session) => Ok(Some(session.username.clone())),
            None => Ok(None),
        }
    }

    /// Drop every expired session and persist the survivors. Returns how
    /// many sessions were removed.
    pub async fn purge_expired(&self) -> Result<usize, AppError> {
        let mut sessions = self.sessions.write().await;
        let now = Utc::now();
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(now));

        let removed = before - sessions.len();
        if removed > 0 {
            self.persist(&sessions).await?;
        }

        Ok(removed)
    }

    /// Number of currently tracked sessions.
    pub async fn active_sessions(&self) -> usize {
        self.sessions.read().await.len()
    }

    async fn persist(&self, sessions: &HashMap<String, Session>) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(sessions)?;
        tokio_fs::write(&self.path, json).await?;
        Ok(())
    }
}
