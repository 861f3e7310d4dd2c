//! Client Configuration
//!
//! Backend origin and transport conventions. The origin can be baked in at
//! build time through `ITEM_LEDGER_API_URL`.

/// How long a reported error stays on screen
pub const ERROR_BANNER_TIMEOUT_MS: u32 = 5000;

/// Shown when a failure carries no readable message
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred. Please try again later.";

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Origin every endpoint path is resolved against
    pub base_url: String,
    /// Scheme prefix of the `Authorization` header
    pub auth_scheme: String,
    pub csrf_cookie: String,
    pub csrf_header: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("ITEM_LEDGER_API_URL")
                .unwrap_or(DEFAULT_BASE_URL)
                .to_string(),
            auth_scheme: "Token".to_string(),
            csrf_cookie: "csrftoken".to_string(),
            csrf_header: "X-CSRFToken".to_string(),
        }
    }
}

impl ApiConfig {
    /// Absolute URL for an endpoint path
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Header value carrying the session token
    pub fn authorization(&self, token: &str) -> String {
        format!("{} {}", self.auth_scheme, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        }
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let config = config("http://api.test/");
        assert_eq!(config.url("/items"), "http://api.test/items");
        assert_eq!(config.url("summary"), "http://api.test/summary");
    }

    #[test]
    fn test_authorization_header() {
        let config = config("http://api.test");
        assert_eq!(config.authorization("abc"), "Token abc");
    }
}
