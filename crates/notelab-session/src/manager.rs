//! Session Manager
//!
//! Owns the single active credential and mirrors every change to storage.

use parking_lot::RwLock;
use std::sync::Arc;

use notelab_storage::{keys, Database};

use crate::session::Credential;
use crate::Result;

pub struct SessionManager {
    /// Active credential, if any
    credential: Arc<RwLock<Option<Credential>>>,
    /// Database for persistence
    db: Database,
}

impl SessionManager {
    /// Create an empty session. Call [`SessionManager::initialize`] to restore
    /// a persisted credential.
    pub fn new(db: Database) -> Self {
        Self {
            credential: Arc::new(RwLock::new(None)),
            db,
        }
    }

    /// Load the persisted credential from storage
    pub fn initialize(&self) -> Result<Option<Credential>> {
        let restored = self
            .db
            .get_setting(keys::TOKEN)?
            .as_deref()
            .and_then(Credential::parse);

        *self.credential.write() = restored.clone();

        tracing::info!(
            authenticated = restored.is_some(),
            "Initialized session"
        );

        Ok(restored)
    }

    /// Replace or clear the active credential.
    ///
    /// The in-memory state always changes; a storage failure is logged and
    /// otherwise ignored so callers never have to handle it.
    pub fn set_credential(&self, token: Option<&str>) {
        let credential = token.and_then(Credential::parse);

        let persisted = match &credential {
            Some(c) => self.db.set_setting(keys::TOKEN, c.token()),
            None => self.db.remove_setting(keys::TOKEN),
        };

        if let Err(e) = persisted {
            tracing::error!("Failed to persist credential: {}", e);
        }

        let authenticated = credential.is_some();
        *self.credential.write() = credential;

        tracing::debug!(authenticated, "Session credential updated");
    }

    pub fn clear(&self) {
        self.set_credential(None);
    }

    pub fn token(&self) -> Option<String> {
        self.credential
            .read()
            .as_ref()
            .map(|c| c.token().to_string())
    }

    /// Current `Authorization` header value
    pub fn authorization_header(&self) -> Option<String> {
        self.credential
            .read()
            .as_ref()
            .map(|c| c.authorization().to_string())
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.read().is_some()
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl Clone for SessionManager {
    fn clone(&self) -> Self {
        Self {
            credential: Arc::clone(&self.credential),
            db: self.db.clone(),
        }
    }
}
