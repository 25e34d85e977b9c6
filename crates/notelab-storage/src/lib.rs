//! Notelab Storage Layer
//!
//! SQLite-backed local key-value storage. Survives restarts and holds the
//! bearer credential, the last-known user profile and the theme preference.

mod database;
mod error;
pub mod keys;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
