//! Application state for one CLI invocation

use anyhow::{Context, Result};
use notelab_core::{Config, Notelab};

pub struct AppState {
    app: Notelab,
}

impl AppState {
    /// Load configuration, open storage and restore the stored credential.
    /// The credential is not verified here; commands that need a checked
    /// session call [`Notelab::initialize`] themselves.
    pub fn new(backend: Option<&str>) -> Result<Self> {
        let mut config = Config::from_env().context("Failed to load configuration")?;
        if let Some(url) = backend {
            config = config.with_base_url(url)?;
        }

        tracing::debug!(
            backend = %config.base_url,
            database = %config.database_path.display(),
            "Loaded configuration"
        );

        let app = Notelab::new(config).context("Failed to open local storage")?;
        app.session().initialize()?;

        Ok(Self { app })
    }

    pub fn app(&self) -> &Notelab {
        &self.app
    }
}
