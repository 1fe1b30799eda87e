// ============================
// crates/backend-lib/src/config.rs
// ============================
//! Configuration management.
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;

/// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server bind address
    pub bind_addr: SocketAddr,
    /// Directory holding the credential, session, and owner files
    pub data_dir: PathBuf,
    /// Log level
    pub log_level: String,
    /// Session TTL in seconds
    pub session_ttl_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".parse().unwrap(),
            data_dir: PathBuf::from("data"),
            log_level: "info".to_string(),
            session_ttl_secs: 60 * 60 * 24, // 24 hours
        }
    }
}

impl Settings {
    /// Load settings from `config/default.toml` (if present) and
    /// `STASH_`-prefixed environment variables.
    pub fn load() -> Result<Self> {
        Self::load_from("config/default")
    }

    /// Load settings from a specific config file over the built-in defaults.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let defaults = Settings::default();

        let config = Config::builder()
            .set_default("bind_addr", defaults.bind_addr.to_string())?
            .set_default("data_dir", defaults.data_dir.to_string_lossy().to_string())?
            .set_default("log_level", defaults.log_level)?
            .set_default("session_ttl_secs", defaults.session_ttl_secs as i64)?
            .add_source(File::from(path.as_ref()).required(false))
            .add_source(Environment::with_prefix("STASH"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
