// ============================
// crates/backend-lib/src/auth/credentials.rs
// ============================
//! Credential storage, persisted as a JSON file keyed by username.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tokio::fs as tokio_fs;
use tokio::sync::RwLock;
use tracing::info;

use crate::auth::password::{hash_password, verify_password};
use crate::error::AppError;

/// Username -> password digest map. The full set is rewritten on every
/// mutation; a crash mid-write can corrupt the file.
pub struct CredentialStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl CredentialStore {
    /// Open the store, loading any existing credential file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let entries = if path.exists() {
            serde_json::from_str(&fs::read_to_string(&path)?)?
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Register a new user.
    ///
    /// The write lock is held across the whole read-modify-write cycle so
    /// concurrent registrations cannot drop each other's entries.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), AppError> {
        if username.is_empty() || password.is_empty() {
            return Err(AppError::InvalidInput(
                "Missing username or password".to_string(),
            ));
        }

        let mut entries = self.entries.write().await;
        if entries.contains_key(username) {
            return Err(AppError::AlreadyExists(username.to_string()));
        }

        entries.insert(username.to_string(), hash_password(password));
        self.persist(&entries).await?;
        info!(username, "registered new user");

        Ok(())
    }

    /// Check a plaintext password against the stored digest.
    pub async fn verify(&self, username: &str, password: &str) -> bool {
        let entries = self.entries.read().await;
        entries
            .get(username)
            .map_or(false, |stored| verify_password(stored, password))
    }

    async fn persist(&self, entries: &HashMap<String, String>) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(entries)?;
        tokio_fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (CredentialStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = CredentialStore::open(dir.path().join("credentials.json")).unwrap();
        (store, dir)
    }

    #[tokio::test]
    async fn test_register_and_verify() {
        let (store, _dir) = setup();

        store.register("alice", "secret123").await.unwrap();

        assert!(store.verify("alice", "secret123").await);
        assert!(!store.verify("alice", "wrong").await);
        assert!(!store.verify("bob", "secret123").await);
    }

    #[tokio::test]
    async fn test_duplicate_registration_leaves_credential_unchanged() {
        let (store, _dir) = setup();

        store.register("alice", "secret123").await.unwrap();
        let result = store.register("alice", "other-password").await;

        assert!(matches!(result, Err(AppError::AlreadyExists(_))));
        assert!(store.verify("alice", "secret123").await);
        assert!(!store.verify("alice", "other-password").await);
    }

    #[tokio::test]
    async fn test_empty_input_rejected() {
        let (store, _dir) = setup();

        assert!(matches!(
            store.register("", "secret123").await,
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            store.register("alice", "").await,
            Err(AppError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_credentials_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.json");

        {
            let store = CredentialStore::open(&path).unwrap();
            store.register("alice", "secret123").await.unwrap();
        }

        let reopened = CredentialStore::open(&path).unwrap();
        assert!(reopened.verify("alice", "secret123").await);
    }
}
