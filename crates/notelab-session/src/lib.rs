//! Notelab Session Management
//!
//! - A session holds at most one bearer credential
//! - The authorization header is derived from the credential and never set on its own
//! - The credential is read from storage once at startup and written on every change
//! - Preferences (cached profile, theme) share the same storage but are owned by callers

mod error;
mod manager;
mod preferences;
mod session;

pub use error::SessionError;
pub use manager::SessionManager;
pub use preferences::{Preferences, Theme};
pub use session::Credential;

pub type Result<T> = std::result::Result<T, SessionError>;
