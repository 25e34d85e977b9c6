//! Transport seam between request building and the network

use async_trait::async_trait;
use reqwest::{Client, Request, Response};

/// Executes a fully built request. Errors mean no response was obtained.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: Request) -> reqwest::Result<Response>;
}

/// Transport backed by a `reqwest` client
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: Request) -> reqwest::Result<Response> {
        self.client.execute(request).await
    }
}
