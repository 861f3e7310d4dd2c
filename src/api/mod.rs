//! Backend API
//!
//! The REST endpoints the client consumes, behind a trait so the session
//! logic can run against any transport.

mod http;

use serde_json::Value;
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::config::FALLBACK_ERROR_MESSAGE;
use crate::models::{Item, LoginRequest, LoginResponse, SignupRequest, SummaryData};

pub use http::HttpClient;

/// Members of an error body that hold a readable message, in lookup order
const MESSAGE_KEYS: &[&str] = &["error", "detail", "message", "non_field_errors"];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        let text = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        ApiError::Network(text)
    }
}

impl ApiError {
    /// Text for the error banner: the server's message when it sent one
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { body, .. } => {
                message_from_body(body).unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
            }
            _ => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}

fn message_from_body(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(s)) => non_empty(s),
        Ok(Value::Object(map)) => MESSAGE_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(message_from_value))
            .or_else(|| Some(Value::Object(map).to_string())),
        Ok(Value::Array(values)) => values.iter().find_map(message_from_value),
        Ok(_) => None,
        // HTML error pages are not worth showing
        Err(_) if body.starts_with('<') => None,
        Err(_) => Some(body.to_string()),
    }
}

fn message_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_empty(s.clone()),
        Value::Array(values) => values.iter().find_map(message_from_value),
        _ => None,
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Backend operations used by the controller.
///
/// `set_token` installs (or removes) the credential sent with every later
/// request.
#[allow(async_fn_in_trait)]
pub trait Api {
    fn set_token(&self, token: Option<&str>);

    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError>;

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    async fn logout(&self) -> Result<(), ApiError>;

    async fn items(&self) -> Result<Vec<Item>, ApiError>;

    async fn summary(&self) -> Result<SummaryData, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(body: &str) -> ApiError {
        ApiError::Status { status: 400, body: body.to_string() }
    }

    #[test]
    fn test_message_from_json_string_body() {
        assert_eq!(status(r#""Invalid credentials""#).user_message(), "Invalid credentials");
    }

    #[test]
    fn test_message_from_structured_body() {
        assert_eq!(status(r#"{"error":"Wrong password"}"#).user_message(), "Wrong password");
        assert_eq!(status(r#"{"detail":"Not found."}"#).user_message(), "Not found.");
        assert_eq!(
            status(r#"{"non_field_errors":["Unable to log in."]}"#).user_message(),
            "Unable to log in."
        );
    }

    #[test]
    fn test_unknown_object_body_shown_as_json() {
        assert_eq!(
            status(r#"{"username":["taken"]}"#).user_message(),
            r#"{"username":["taken"]}"#
        );
    }

    #[test]
    fn test_plain_text_body() {
        assert_eq!(status("Bad Request").user_message(), "Bad Request");
    }

    #[test]
    fn test_fallback_message() {
        assert_eq!(status("").user_message(), FALLBACK_ERROR_MESSAGE);
        assert_eq!(status("<html>500</html>").user_message(), FALLBACK_ERROR_MESSAGE);
        assert_eq!(status("null").user_message(), FALLBACK_ERROR_MESSAGE);
        assert_eq!(ApiError::Network("offline".into()).user_message(), FALLBACK_ERROR_MESSAGE);
        assert_eq!(ApiError::Decode("eof".into()).user_message(), FALLBACK_ERROR_MESSAGE);
    }
}
