//! Notelab API Client
//!
//! Single point of contact with the backend:
//! - Builds requests with the session's bearer header and a cookie-carrying transport
//! - Classifies responses into authentication, request and network failures
//! - A 401 from any endpoint clears the session before the error is returned
//! - One typed method per backend endpoint (auth, teams, topics, notes, AI)

mod client;
mod endpoints;
mod error;
pub mod models;
mod request;
mod response;
mod transport;

#[cfg(test)]
mod testing;

pub use client::ApiClient;
pub use endpoints::ai::DEFAULT_LANGUAGE;
pub use error::ApiError;
pub use request::{ApiRequest, RequestBody, Upload};
pub use response::Payload;
pub use transport::{HttpTransport, Transport};

pub use reqwest::{Method, StatusCode};

pub type Result<T> = std::result::Result<T, ApiError>;
