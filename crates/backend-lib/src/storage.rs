// ============================
// crates/backend-lib/src/storage.rs
// ============================
//! Per-owner blob storage with a flat-file implementation.
use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs as tokio_fs;

use crate::error::AppError;

/// Trait for per-owner blob storage backends
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Read the blob stored for an owner, if any
    async fn read(&self, owner: &str) -> Result<Option<Value>, AppError>;

    /// Write (replace) the blob stored for an owner
    async fn write(&self, owner: &str, data: &Value) -> Result<(), AppError>;

    /// Delete the blob stored for an owner; deleting nothing is not an error
    async fn delete(&self, owner: &str) -> Result<(), AppError>;
}

/// Flat-file implementation of the `DataStore` trait, one JSON file per
/// owner.
#[derive(Clone)]
pub struct FlatFileStore {
    root: PathBuf,
}

impl FlatFileStore {
    pub fn new<P: AsRef<Path>>(root: P) -> anyhow::Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(root.join("owners"))?;
        Ok(Self { root })
    }

    // owner names are validated at registration, so they are safe as file
    // names
    fn owner_path(&self, owner: &str) -> PathBuf {
        self.root.join("owners").join(format!("{owner}.json"))
    }
}

#[async_trait]
impl DataStore for FlatFileStore {
    async fn read(&self, owner: &str) -> Result<Option<Value>, AppError> {
        let path = self.owner_path(owner);

        if !path.exists() {
            return Ok(None);
        }

        let content = tokio_fs::read_to_string(&path).await?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    async fn write(&self, owner: &str, data: &Value) -> Result<(), AppError> {
        let path = self.owner_path(owner);
        let json = serde_json::to_string_pretty(data)?;
        tokio_fs::write(&path, json).await?;
        Ok(())
    }

    async fn delete(&self, owner: &str) -> Result<(), AppError> {
        let path = self.owner_path(owner);

        if path.exists() {
            tokio_fs::remove_file(&path).await?;
        }

        Ok(())
    }
}
