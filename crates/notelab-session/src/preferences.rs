//! Local preferences written by front ends: cached user profile and theme

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use notelab_storage::{keys, Database, StorageError};

use crate::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct Preferences {
    db: Database,
}

impl Preferences {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Stored theme, `Light` when unset or unreadable
    pub fn theme(&self) -> Result<Theme> {
        let theme = self
            .db
            .get_setting(keys::THEME)?
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();
        Ok(theme)
    }

    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        self.db.set_setting(keys::THEME, theme.as_str())?;
        Ok(())
    }

    pub fn toggle_theme(&self) -> Result<Theme> {
        let theme = self.theme()?.toggled();
        self.set_theme(theme)?;
        Ok(theme)
    }

    /// Last-known user profile. A corrupt entry reads as absent.
    pub fn cached_user<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        match self.db.get_json(keys::USER) {
            Ok(user) => Ok(user),
            Err(StorageError::Json(e)) => {
                tracing::warn!("Ignoring unreadable cached user profile: {}", e);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn set_cached_user<T: Serialize>(&self, user: Option<&T>) -> Result<()> {
        match user {
            Some(user) => self.db.set_json(keys::USER, user)?,
            None => self.db.remove_setting(keys::USER)?,
        }
        Ok(())
    }
}

impl Clone for Preferences {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}
