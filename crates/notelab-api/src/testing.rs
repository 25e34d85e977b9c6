//! Scripted transport for request-layer tests

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::header::{HeaderMap, HeaderName, CONTENT_TYPE};
use reqwest::{Method, Request, Response};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Arc;

use notelab_session::SessionManager;
use notelab_storage::Database;

use crate::client::ApiClient;
use crate::transport::Transport;

pub(crate) const BASE_URL: &str = "http://backend.test";

pub(crate) struct MockResponse {
    status: u16,
    content_type: Option<&'static str>,
    body: String,
}

impl MockResponse {
    pub(crate) fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            content_type: Some("application/json"),
            body: body.to_string(),
        }
    }

    pub(crate) fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: Some("text/plain; charset=utf-8"),
            body: body.to_string(),
        }
    }

    pub(crate) fn raw(status: u16, content_type: &'static str, body: &str) -> Self {
        Self {
            status,
            content_type: Some(content_type).filter(|c| !c.is_empty()),
            body: body.to_string(),
        }
    }

    pub(crate) fn empty(status: u16) -> Self {
        Self {
            status,
            content_type: None,
            body: String::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct CapturedRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl CapturedRequest {
    pub(crate) fn header(&self, name: HeaderName) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    pub(crate) fn json_body(&self) -> Option<Value> {
        self.body
            .as_deref()
            .and_then(|b| serde_json::from_slice(b).ok())
    }
}

pub(crate) struct MockTransport {
    responses: Mutex<VecDeque<MockResponse>>,
    requests: Mutex<Vec<CapturedRequest>>,
}

impl MockTransport {
    pub(crate) fn new(responses: Vec<MockResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().clone()
    }

    pub(crate) fn last_request(&self) -> CapturedRequest {
        self.requests
            .lock()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: Request) -> reqwest::Result<Response> {
        self.requests.lock().push(CapturedRequest {
            method: request.method().clone(),
            url: request.url().to_string(),
            headers: request.headers().clone(),
            body: request
                .body()
                .and_then(|b| b.as_bytes())
                .map(<[u8]>::to_vec),
        });

        let scripted = self
            .responses
            .lock()
            .pop_front()
            .expect("no scripted response left");

        let mut builder = http::Response::builder().status(scripted.status);
        if let Some(content_type) = scripted.content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }

        let response = builder
            .body(scripted.body)
            .expect("valid scripted response");
        Ok(Response::from(response))
    }
}

/// Client with a fresh in-memory session and the given scripted responses
pub(crate) fn mock_client(responses: Vec<MockResponse>) -> (ApiClient, Arc<MockTransport>) {
    let db = Database::open_in_memory().expect("in-memory database");
    let session = SessionManager::new(db);
    let transport = Arc::new(MockTransport::new(responses));

    let client = ApiClient::with_transport(
        BASE_URL,
        session,
        reqwest::Client::new(),
        transport.clone(),
    )
    .expect("valid base url");

    (client, transport)
}
