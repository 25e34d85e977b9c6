//! Backend client
//!
//! Every call goes through [`ApiClient::send`], which attaches the session's
//! bearer header, dispatches through the transport and classifies the result.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

use notelab_session::SessionManager;

use crate::error::ApiError;
use crate::request::{ApiRequest, RequestBody};
use crate::response::Payload;
use crate::transport::{HttpTransport, Transport};
use crate::Result;

const USER_AGENT: &str = concat!("notelab/", env!("CARGO_PKG_VERSION"));
const JSON_CONTENT_TYPE: &str = "application/json";

pub struct ApiClient {
    /// Backend origin every path is appended to
    base_url: Url,
    /// Builds requests; also executes them for the default transport
    http: reqwest::Client,
    transport: Arc<dyn Transport>,
    session: SessionManager,
}

impl ApiClient {
    /// Client talking to `base_url` over HTTP, with a cookie store so
    /// backend-set session cookies are sent back on later requests.
    pub fn new(base_url: &str, session: SessionManager) -> Result<Self> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .user_agent(USER_AGENT)
            .build()
            .map_err(ApiError::Client)?;
        let transport = Arc::new(HttpTransport::new(http.clone()));

        Self::with_transport(base_url, session, http, transport)
    }

    /// Client with a custom transport. `http` is only used to build requests.
    pub fn with_transport(
        base_url: &str,
        session: SessionManager,
        http: reqwest::Client,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;

        tracing::debug!(base_url = %base_url, "Created API client");

        Ok(Self {
            base_url,
            http,
            transport,
            session,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Store or clear the bearer credential used by subsequent requests
    pub fn set_credential(&self, token: Option<&str>) {
        self.session.set_credential(token);
    }

    /// Dispatch a request and return the decoded body.
    ///
    /// A 401 clears the session and fails with [`ApiError::Authentication`]
    /// whatever the body says. Other non-2xx statuses fail with
    /// [`ApiError::Request`].
    pub async fn send(&self, request: ApiRequest) -> Result<Payload> {
        let method = request.method.clone();
        let endpoint = request.path.clone();

        tracing::debug!(method = %method, endpoint = %endpoint, "API request");

        let result = self.dispatch(request).await;
        if let Err(e) = &result {
            tracing::error!(method = %method, endpoint = %endpoint, error = %e, "API error");
        }

        result
    }

    /// [`ApiClient::send`] followed by conversion into a typed model
    pub async fn send_typed<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let endpoint = request.path.clone();
        let payload = self.send(request).await?;

        payload.into_typed(&endpoint).inspect_err(|e| {
            tracing::error!(endpoint = %endpoint, error = %e, "API error");
        })
    }

    async fn dispatch(&self, request: ApiRequest) -> Result<Payload> {
        let endpoint = request.path.clone();
        let request = self.build_request(request)?;

        let response = self
            .transport
            .execute(request)
            .await
            .map_err(ApiError::Network)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            self.session.clear();
            return Err(ApiError::Authentication);
        }

        let content_type = response.headers().get(CONTENT_TYPE).cloned();
        let body = response.bytes().await.map_err(ApiError::Network)?;
        let payload = Payload::decode(content_type.as_ref(), &body);

        if !status.is_success() {
            let message = match &payload {
                Ok(payload) => payload.error_message(),
                Err(_) => crate::response::FALLBACK_MESSAGE.to_string(),
            };
            return Err(ApiError::Request { status, message });
        }

        payload.map_err(|source| ApiError::UnexpectedPayload { endpoint, source })
    }

    /// Build the outgoing request. The authorization header is captured
    /// here, so later credential changes do not affect it.
    pub(crate) fn build_request(&self, request: ApiRequest) -> Result<reqwest::Request> {
        let url = self.endpoint_url(&request.path)?;
        let mut builder = self.http.request(request.method, url);

        if let Some(authorization) = self.session.authorization_header() {
            builder = builder.header(AUTHORIZATION, authorization);
        }

        builder = match request.body {
            // The transport writes the multipart content type with its boundary
            Some(RequestBody::Multipart(upload)) => {
                builder.multipart(upload.into_form().map_err(ApiError::Client)?)
            }
            Some(RequestBody::Json(value)) => builder
                .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
                .body(serde_json::to_vec(&value)?),
            None => builder.header(CONTENT_TYPE, JSON_CONTENT_TYPE),
        };

        builder.build().map_err(ApiError::Client)
    }

    fn endpoint_url(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let joined = if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        };

        Url::parse(&joined).map_err(|source| ApiError::InvalidPath {
            path: path.to_string(),
            source,
        })
    }
}

impl Clone for ApiClient {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            http: self.http.clone(),
            transport: Arc::clone(&self.transport),
            session: self.session.clone(),
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|e| ApiError::InvalidBaseUrl(format!("{trimmed}: {e}")))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ApiError::InvalidBaseUrl(format!(
            "{trimmed}: only http(s) backends are supported"
        )));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Upload;
    use crate::testing::{mock_client, MockResponse};
    use notelab_storage::keys;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_teams_success() {
        let (client, transport) = mock_client(vec![MockResponse::json(
            200,
            json!([{"_id": "1", "name": "A"}]),
        )]);

        let payload = client.send(ApiRequest::get("/api/teams/")).await.unwrap();
        assert_eq!(payload, Payload::Json(json!([{"_id": "1", "name": "A"}])));

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, reqwest::Method::GET);
        assert_eq!(sent[0].url, "http://backend.test/api/teams/");
    }

    #[tokio::test]
    async fn test_unauthorized_clears_session() {
        let (client, _) = mock_client(vec![MockResponse::json(
            401,
            json!({"detail": "Could not validate credentials"}),
        )]);
        client.set_credential(Some("stale"));

        let err = client
            .send(ApiRequest::get("/api/teams/"))
            .await
            .unwrap_err();

        assert!(err.is_authentication());
        assert!(!client.session().is_authenticated());
        assert_eq!(
            client.session().database().get_setting(keys::TOKEN).unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_unauthorized_ignores_body_shape() {
        let bodies = vec![
            MockResponse::text(401, "nope"),
            MockResponse::empty(401),
            MockResponse::json(401, json!({"message": "expired"})),
            MockResponse::raw(401, "application/json", "{broken"),
        ];
        let count = bodies.len();
        let (client, _) = mock_client(bodies);

        for _ in 0..count {
            client.set_credential(Some("token"));
            let err = client.send(ApiRequest::get("/api/auth/me")).await.unwrap_err();
            assert!(matches!(err, ApiError::Authentication));
            assert!(!client.session().is_authenticated());
        }
    }

    #[tokio::test]
    async fn test_server_error_detail() {
        let (client, _) = mock_client(vec![MockResponse::json(500, json!({"detail": "boom"}))]);

        let err = client
            .send(ApiRequest::get("/api/teams/"))
            .await
            .unwrap_err();

        match err {
            ApiError::Request { status, message } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_request_error_messages() {
        let (client, _) = mock_client(vec![
            MockResponse::json(400, json!({"message": "X"})),
            MockResponse::json(404, json!({"detail": "Y"})),
            MockResponse::json(403, json!({})),
            MockResponse::text(502, "Bad Gateway"),
            MockResponse::raw(500, "application/json", "not json"),
        ]);

        let mut messages = Vec::new();
        for _ in 0..5 {
            let err = client.send(ApiRequest::get("/api/notes/1")).await.unwrap_err();
            messages.push(err.to_string());
        }

        assert_eq!(
            messages,
            vec!["X", "Y", "Request failed", "Request failed", "Request failed"]
        );
        assert!(!client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_request_error_keeps_session() {
        let (client, _) = mock_client(vec![MockResponse::json(403, json!({"detail": "no"}))]);
        client.set_credential(Some("abc"));

        let err = client.send(ApiRequest::get("/api/teams/9")).await.unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
        assert_eq!(client.session().token().as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_text_payload_when_not_json() {
        let (client, _) = mock_client(vec![
            MockResponse::text(200, "hello"),
            MockResponse::raw(200, "", r#"{"a":1}"#),
        ]);

        let payload = client.send(ApiRequest::get("/health")).await.unwrap();
        assert_eq!(payload, Payload::Text("hello".to_string()));

        let payload = client.send(ApiRequest::get("/health")).await.unwrap();
        assert_eq!(payload.as_text(), Some(r#"{"a":1}"#));
    }

    #[tokio::test]
    async fn test_malformed_json_success_is_unexpected_payload() {
        let (client, _) = mock_client(vec![MockResponse::raw(200, "application/json", "{oops")]);

        let err = client.send(ApiRequest::get("/api/teams/")).await.unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedPayload { .. }));
    }

    #[tokio::test]
    async fn test_json_body_and_headers() {
        let (client, transport) = mock_client(vec![MockResponse::json(201, json!({"ok": true}))]);
        client.set_credential(Some("abc"));

        client
            .send(ApiRequest::post("/api/teams/").json_value(json!({"name": "A"})))
            .await
            .unwrap();

        let sent = &transport.requests()[0];
        assert_eq!(sent.header(CONTENT_TYPE).as_deref(), Some("application/json"));
        assert_eq!(sent.header(AUTHORIZATION).as_deref(), Some("Bearer abc"));

        let body: serde_json::Value = serde_json::from_slice(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"name": "A"}));
    }

    #[tokio::test]
    async fn test_no_authorization_without_credential() {
        let (client, transport) = mock_client(vec![MockResponse::json(200, json!([]))]);

        client.send(ApiRequest::get("/api/notes/")).await.unwrap();
        assert_eq!(transport.requests()[0].header(AUTHORIZATION), None);
    }

    #[tokio::test]
    async fn test_binary_body_has_no_json_content_type() {
        let (client, transport) = mock_client(vec![MockResponse::json(200, json!({"result": "ok"}))]);

        let upload = Upload::new("lecture.pdf", b"%PDF-1.4".to_vec()).with_mime_type("application/pdf");
        client
            .send(ApiRequest::post("/api/ai/process-pdf").multipart(upload))
            .await
            .unwrap();

        let content_type = transport.requests()[0].header(CONTENT_TYPE).unwrap();
        assert!(content_type.starts_with("multipart/form-data"));
        assert!(!content_type.contains("application/json"));
    }

    #[tokio::test]
    async fn test_authorization_captured_at_build_time() {
        let (client, _) = mock_client(vec![]);
        client.set_credential(Some("first"));

        let request = client.build_request(ApiRequest::get("/api/auth/me")).unwrap();
        client.set_credential(Some("second"));

        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap().to_str().unwrap(),
            "Bearer first"
        );

        let next = client.build_request(ApiRequest::get("/api/auth/me")).unwrap();
        assert_eq!(
            next.headers().get(AUTHORIZATION).unwrap().to_str().unwrap(),
            "Bearer second"
        );
    }

    #[tokio::test]
    async fn test_network_error() {
        let db = notelab_storage::Database::open_in_memory().unwrap();
        let client = ApiClient::new("http://127.0.0.1:1", SessionManager::new(db)).unwrap();

        let err = client.send(ApiRequest::get("/api/teams/")).await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[tokio::test]
    async fn test_cookies_are_sent_back() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let replies = [
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nSet-Cookie: sid=xyz; Path=/\r\nContent-Length: 2\r\nConnection: close\r\n\r\n{}",
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 2\r\nConnection: close\r\n\r\n[]",
            ];

            let mut received = Vec::new();
            for reply in replies {
                let (mut socket, _) = listener.accept().await.unwrap();

                let mut head = Vec::new();
                let mut chunk = [0u8; 1024];
                while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = socket.read(&mut chunk).await.unwrap();
                    if n == 0 {
                        break;
                    }
                    head.extend_from_slice(&chunk[..n]);
                }
                received.push(String::from_utf8_lossy(&head).to_lowercase());

                socket.write_all(reply.as_bytes()).await.unwrap();
                socket.shutdown().await.unwrap();
            }
            received
        });

        let db = notelab_storage::Database::open_in_memory().unwrap();
        let client = ApiClient::new(&format!("http://{}", addr), SessionManager::new(db)).unwrap();

        client.send(ApiRequest::post("/api/auth/login")).await.unwrap();
        client.send(ApiRequest::get("/api/teams/")).await.unwrap();

        let received = server.await.unwrap();
        assert!(!received[0].contains("\r\ncookie:"));
        assert!(received[1].contains("\r\ncookie: sid=xyz"));
    }

    #[test]
    fn test_endpoint_url_keeps_base_prefix() {
        let (client, _) = mock_client(vec![]);
        assert_eq!(
            client.endpoint_url("/api/notes/").unwrap().as_str(),
            "http://backend.test/api/notes/"
        );

        let db = notelab_storage::Database::open_in_memory().unwrap();
        let prefixed = ApiClient::new("https://example.com/notelab/", SessionManager::new(db)).unwrap();
        assert_eq!(
            prefixed.endpoint_url("/api/notes/?topic_id=t1").unwrap().as_str(),
            "https://example.com/notelab/api/notes/?topic_id=t1"
        );
        assert_eq!(
            prefixed.endpoint_url("api/teams/").unwrap().as_str(),
            "https://example.com/notelab/api/teams/"
        );
    }

    #[test]
    fn test_base_url_validation() {
        let db = notelab_storage::Database::open_in_memory().unwrap();
        let session = SessionManager::new(db);

        assert!(matches!(
            ApiClient::new("ftp://example.com", session.clone()),
            Err(ApiError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            ApiClient::new("not a url", session.clone()),
            Err(ApiError::InvalidBaseUrl(_))
        ));
        assert!(ApiClient::new(" http://localhost:8000 ", session).is_ok());
    }
}
