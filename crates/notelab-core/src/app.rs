//! Application facade
//!
//! One [`Notelab`] owns the database, the session, local preferences and the
//! API client, and runs the flows that touch more than one of them.

use notelab_api::models::{Credentials, NewUser, User};
use notelab_api::ApiClient;
use notelab_session::{Preferences, SessionManager, Theme};
use notelab_storage::Database;

use crate::config::Config;
use crate::Result;

pub struct Notelab {
    config: Config,
    db: Database,
    session: SessionManager,
    preferences: Preferences,
    api: ApiClient,
}

impl Notelab {
    /// Open the data directory and connect the layers. Nothing is read from
    /// storage until [`Notelab::initialize`].
    pub fn new(config: Config) -> Result<Self> {
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        let session = SessionManager::new(db.clone());
        let api = ApiClient::new(&config.base_url, session)?;

        Ok(Self::with_client(config, api))
    }

    /// Build around an existing client; its session's database is reused.
    pub fn with_client(config: Config, api: ApiClient) -> Self {
        let session = api.session().clone();
        let db = session.database().clone();

        Self {
            config,
            preferences: Preferences::new(db.clone()),
            db,
            session,
            api,
        }
    }

    /// Restore the persisted session and confirm it with the backend.
    ///
    /// Returns the signed-in user, or `None` when the caller should prompt
    /// for credentials. A credential the backend no longer accepts is
    /// discarded together with the cached profile.
    pub async fn initialize(&self) -> Result<Option<User>> {
        if self.session.initialize()?.is_none() {
            return Ok(None);
        }

        match self.api.current_user().await {
            Ok(user) => {
                self.preferences.set_cached_user(Some(&user))?;
                tracing::info!(user = %user.username, "Session restored");
                Ok(Some(user))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Stored session rejected, signing out");
                self.session.clear();
                self.preferences.set_cached_user::<User>(None)?;
                Ok(None)
            }
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User> {
        self.api.login(&Credentials::new(email, password)).await?;

        let user = self.api.current_user().await?;
        self.preferences.set_cached_user(Some(&user))?;

        tracing::info!(user = %user.username, "Signed in");
        Ok(user)
    }

    /// Register an account. The profile is cached only when the backend
    /// signed the new user in.
    pub async fn register(&self, new_user: &NewUser) -> Result<User> {
        let user = self.api.register(new_user).await?;

        if self.session.is_authenticated() {
            self.preferences.set_cached_user(Some(&user))?;
        }

        Ok(user)
    }

    /// Drop the local session, then tell the backend. A backend that already
    /// considers the session invalid counts as signed out.
    pub async fn sign_out(&self) -> Result<()> {
        self.preferences.set_cached_user::<User>(None)?;

        match self.api.logout().await {
            Ok(()) => Ok(()),
            Err(e) if e.is_authentication() => {
                tracing::debug!("Backend session already expired");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Profile cached by the last successful sign-in or startup check
    pub fn cached_user(&self) -> Result<Option<User>> {
        Ok(self.preferences.cached_user()?)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn theme(&self) -> Result<Theme> {
        Ok(self.preferences.theme()?)
    }

    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        Ok(self.preferences.set_theme(theme)?)
    }

    pub fn toggle_theme(&self) -> Result<Theme> {
        Ok(self.preferences.toggle_theme()?)
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl Clone for Notelab {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            db: self.db.clone(),
            session: self.session.clone(),
            preferences: self.preferences.clone(),
            api: self.api.clone(),
        }
    }
}
