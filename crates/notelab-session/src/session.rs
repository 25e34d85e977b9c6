//! Credential data structure

use std::fmt;

/// A bearer token and the authorization header derived from it
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
    authorization: String,
}

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        let authorization = format!("Bearer {}", token);

        Self {
            token,
            authorization,
        }
    }

    /// Parse a stored or received token. An empty token is treated as absent;
    /// any other value is kept verbatim.
    pub fn parse(token: &str) -> Option<Self> {
        if token.is_empty() {
            None
        } else {
            Some(Self::new(token))
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Value for the `Authorization` request header
    pub fn authorization(&self) -> &str {
        &self.authorization
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .finish()
    }
}
