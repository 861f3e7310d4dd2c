//! Fetch-based HTTP Client
//!
//! Browser `fetch` transport. Requests carry cookies, the CSRF header the
//! backend expects, and the session token once one is installed.

use std::cell::RefCell;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, HtmlDocument, Request, RequestCredentials, RequestInit, Response};

use super::{Api, ApiError};
use crate::config::ApiConfig;
use crate::models::{Item, LoginRequest, LoginResponse, SignupRequest, SummaryData};

pub struct HttpClient {
    config: ApiConfig,
    authorization: RefCell<Option<String>>,
}

impl HttpClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            authorization: RefCell::new(None),
        }
    }

    async fn send(&self, method: &str, path: &str, body: Option<String>) -> Result<String, ApiError> {
        let headers = Headers::new()?;
        headers.set("Accept", "application/json")?;
        if let Some(value) = self.authorization.borrow().as_deref() {
            headers.set("Authorization", value)?;
        }
        if let Some(token) = csrf_token(&self.config.csrf_cookie) {
            headers.set(&self.config.csrf_header, &token)?;
        }

        let init = RequestInit::new();
        init.set_method(method);
        init.set_credentials(RequestCredentials::Include);
        if let Some(body) = &body {
            headers.set("Content-Type", "application/json")?;
            init.set_body(&body.into());
        }
        init.set_headers(&headers);

        let url = self.config.url(path);
        let request = Request::new_with_str_and_init(&url, &init)?;
        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await?
            .dyn_into()?;

        let text = JsFuture::from(response.text()?)
            .await?
            .as_string()
            .unwrap_or_default();

        if !response.ok() {
            log::debug!("[API] {} {} -> {}", method, url, response.status());
            return Err(ApiError::Status {
                status: response.status(),
                body: text,
            });
        }
        Ok(text)
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<String, ApiError> {
        let body = serde_json::to_string(body)?;
        self.send("POST", path, Some(body)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let text = self.send("GET", path, None).await?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl Api for HttpClient {
    fn set_token(&self, token: Option<&str>) {
        *self.authorization.borrow_mut() = token.map(|t| self.config.authorization(t));
    }

    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        self.post("/signup", request).await.map(|_| ())
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let text = self.post("/login", request).await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.send("POST", "/logout", None).await.map(|_| ())
    }

    async fn items(&self) -> Result<Vec<Item>, ApiError> {
        self.get_json("/items").await
    }

    async fn summary(&self) -> Result<SummaryData, ApiError> {
        self.get_json("/summary").await
    }
}

fn csrf_token(cookie_name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()?;
    let cookies = document.cookie().ok()?;
    cookie_value(&cookies, cookie_name)
}

/// Look up one cookie in a `document.cookie` string
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value() {
        let cookies = "sessionid=abc; csrftoken=xyz123; theme=dark";
        assert_eq!(cookie_value(cookies, "csrftoken"), Some("xyz123".to_string()));
        assert_eq!(cookie_value(cookies, "sessionid"), Some("abc".to_string()));
        assert_eq!(cookie_value(cookies, "missing"), None);
    }

    #[test]
    fn test_cookie_value_empty() {
        assert_eq!(cookie_value("", "csrftoken"), None);
        assert_eq!(cookie_value("csrftoken=", "csrftoken"), None);
    }
}
