//! Notelab Core
//!
//! Wires storage, session and the API client into one [`Notelab`] instance
//! and owns the process-wide concerns: configuration and logging.

mod app;
mod config;
mod error;

pub use app::Notelab;
pub use config::Config;
pub use error::CoreError;

// Re-export the layers callers work with directly
pub use notelab_api::models;
pub use notelab_api::{ApiClient, ApiError, Upload, DEFAULT_LANGUAGE};
pub use notelab_session::{Credential, Preferences, SessionError, SessionManager, Theme};
pub use notelab_storage::{Database, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging. `RUST_LOG` overrides the default `info` filter.
///
/// Output goes to stderr so stdout stays free for command results.
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
