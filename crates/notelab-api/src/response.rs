//! Response decoding and error-message extraction

use reqwest::header::HeaderValue;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::Result;

/// Message used when a failed response carries no usable message field
pub const FALLBACK_MESSAGE: &str = "Request failed";

/// A decoded response body
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The response declared a JSON content type
    Json(Value),
    /// Any other or missing content type
    Text(String),
}

impl Payload {
    /// Decode a body according to its declared content type.
    /// No sniffing: an unknown or absent content type is always text.
    pub(crate) fn decode(
        content_type: Option<&HeaderValue>,
        body: &[u8],
    ) -> std::result::Result<Self, serde_json::Error> {
        if is_json_content_type(content_type) {
            if body.iter().all(u8::is_ascii_whitespace) {
                return Ok(Payload::Json(Value::Null));
            }
            serde_json::from_slice(body).map(Payload::Json)
        } else {
            Ok(Payload::Text(String::from_utf8_lossy(body).into_owned()))
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Text(_) => None,
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(text) => Some(text),
            Payload::Json(_) => None,
        }
    }

    /// Convert into a typed model. Text bodies are offered as a JSON string.
    pub fn into_typed<T: DeserializeOwned>(self, endpoint: &str) -> Result<T> {
        let value = match self {
            Payload::Json(value) => value,
            Payload::Text(text) => Value::String(text),
        };

        serde_json::from_value(value).map_err(|source| ApiError::UnexpectedPayload {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    /// Human-readable failure message from the conventional fields
    pub fn error_message(&self) -> String {
        self.as_json()
            .and_then(message_from)
            .unwrap_or_else(|| FALLBACK_MESSAGE.to_string())
    }
}

fn message_from(value: &Value) -> Option<String> {
    if let Some(message) = value.get("message").and_then(non_empty_str) {
        return Some(message.to_string());
    }

    match value.get("detail")? {
        Value::String(detail) if !detail.trim().is_empty() => Some(detail.clone()),
        // Validation failures: [{"loc": [...], "msg": "...", "type": "..."}]
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(non_empty_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.trim().is_empty())
}

pub(crate) fn is_json_content_type(content_type: Option<&HeaderValue>) -> bool {
    let Some(raw) = content_type.and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let mime = raw
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
