//! Application configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::CoreError;
use crate::Result;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

const BACKEND_URL_VAR: &str = "NOTELAB_BACKEND_URL";
const DATA_DIR_VAR: &str = "NOTELAB_DATA_DIR";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend origin, e.g. `http://localhost:8000`
    pub base_url: String,
    /// Path to the database file holding the credential and preferences
    pub database_path: PathBuf,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            database_path: data_dir.join("notelab.db"),
        }
    }

    /// Platform data directory, e.g. `~/.local/share/notelab` on Linux
    pub fn data_dir() -> PathBuf {
        platform_data_dir(&|key: &str| std::env::var(key).ok())
    }

    /// Defaults overridden by `NOTELAB_BACKEND_URL` and `NOTELAB_DATA_DIR`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = match lookup(DATA_DIR_VAR) {
            Some(dir) if dir.trim().is_empty() => {
                return Err(CoreError::Config(format!("{} is empty", DATA_DIR_VAR)))
            }
            Some(dir) => PathBuf::from(dir),
            None => platform_data_dir(&lookup),
        };

        let mut config = Self::new(data_dir);
        if let Some(url) = lookup(BACKEND_URL_VAR) {
            config = config.with_base_url(&url)?;
        }

        Ok(config)
    }

    /// Replace the backend origin
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        let base_url = base_url.trim();
        if base_url.is_empty() {
            return Err(CoreError::Config("backend URL is empty".to_string()));
        }

        self.base_url = base_url.to_string();
        Ok(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

fn platform_data_dir<F>(lookup: &F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    let home = || lookup("HOME").map(PathBuf::from);

    let base = if cfg!(target_os = "windows") {
        lookup("LOCALAPPDATA").map(PathBuf::from)
    } else if cfg!(target_os = "macos") {
        home().map(|h| h.join("Library/Application Support"))
    } else {
        lookup("XDG_DATA_HOME")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| home().map(|h| h.join(".local/share")))
    };

    base.map(|dir| dir.join("notelab"))
        .unwrap_or_else(|| PathBuf::from(".notelab"))
}
