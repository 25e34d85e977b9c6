//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] notelab_storage::StorageError),

    #[error("Session error: {0}")]
    Session(#[from] notelab_session::SessionError),

    #[error(transparent)]
    Api(#[from] notelab_api::ApiError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CoreError {
    /// True when the backend rejected the credential
    pub fn is_authentication(&self) -> bool {
        matches!(self, CoreError::Api(e) if e.is_authentication())
    }
}
