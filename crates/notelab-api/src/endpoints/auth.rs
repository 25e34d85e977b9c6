//! `/api/auth`

use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{AuthToken, Credentials, NewUser, User};
use crate::request::ApiRequest;
use crate::Result;

impl ApiClient {
    /// Log in and store the issued token, if the response carries one
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthToken> {
        let request = ApiRequest::post("/api/auth/login").json(credentials)?;
        let token: AuthToken = self.send_typed(request).await?;

        if let Some(value) = token.token.as_deref() {
            self.set_credential(Some(value));
            tracing::info!("Logged in");
        }

        Ok(token)
    }

    /// Register a user. A token in the response (top level or beside a
    /// nested `user`) is stored like a login.
    pub async fn register(&self, new_user: &NewUser) -> Result<User> {
        let endpoint = "/api/auth/register";
        let payload = self.send(ApiRequest::post(endpoint).json(new_user)?).await?;

        let mut body = payload.into_json().unwrap_or(Value::Null);
        if let Some(token) = token_in(&body) {
            self.set_credential(Some(token));
        }

        let user = match body.get_mut("user") {
            Some(user) => user.take(),
            None => body,
        };

        serde_json::from_value(user).map_err(|source| ApiError::UnexpectedPayload {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    pub async fn current_user(&self) -> Result<User> {
        self.send_typed(ApiRequest::get("/api/auth/me")).await
    }

    /// Clear the local credential, then notify the backend.
    ///
    /// The credential is gone whatever the notification returns.
    pub async fn logout(&self) -> Result<()> {
        self.set_credential(None);
        self.send(ApiRequest::post("/api/auth/logout")).await?;

        tracing::info!("Logged out");
        Ok(())
    }

    /// Exchange the current token for a fresh one
    pub async fn refresh_token(&self) -> Result<AuthToken> {
        let token: AuthToken = self.send_typed(ApiRequest::post("/api/auth/refresh")).await?;

        if let Some(value) = token.token.as_deref() {
            self.set_credential(Some(value));
        }

        Ok(token)
    }
}

fn token_in(body: &Value) -> Option<&str> {
    body.get("token")
        .or_else(|| body.get("access_token"))
        .and_then(Value::as_str)
}
