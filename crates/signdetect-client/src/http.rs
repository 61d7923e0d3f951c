//! Shared HTTP plumbing for the backend API.
//!
//! One `ApiClient` is shared by all API implementations so they see the
//! same cookie store: the backend issues a session cookie on login, and
//! every later request carries it implicitly.

use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use signdetect_core::SignDetectError;
use signdetect_core::error::Result;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A thin wrapper over `reqwest::Client` bound to the backend's base URL.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the given base URL (no trailing slash needed).
    ///
    /// The cookie store is enabled so the backend's session cookie is
    /// carried automatically; the client never reads it.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| SignDetectError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        self.execute(self.client.get(&url)).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        self.execute(self.client.post(&url).json(body)).await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        self.execute(self.client.post(&url)).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| SignDetectError::transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SignDetectError::transport(e.to_string()))?;

        decode_body(status.as_u16(), status.is_success(), &body)
    }
}

/// Normalizes a raw HTTP outcome into the shared error shape.
///
/// Non-success statuses become `Status` errors carrying the body's
/// `message`/`error` field when one parses out, otherwise a generic
/// `HTTP error! status: N`. An empty success body decodes as JSON null so
/// endpoints with opaque responses can target `serde_json::Value`.
fn decode_body<T: DeserializeOwned>(code: u16, success: bool, body: &str) -> Result<T> {
    if !success {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .or_else(|| value.get("error"))
                    .and_then(|m| m.as_str())
                    .map(String::from)
            })
            .unwrap_or_else(|| format!("HTTP error! status: {}", code));
        return Err(SignDetectError::status(code, message));
    }

    let payload = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(payload)
        .map_err(|e| SignDetectError::decode(format!("Unexpected response body: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use signdetect_core::auth::Identity;

    #[test]
    fn success_body_decodes_into_target_type() {
        let body = r#"{"id": 3, "email": "ada@example.com", "name": "Ada"}"#;
        let identity: Identity = decode_body(200, true, body).unwrap();
        assert_eq!(identity.id, 3);
        assert_eq!(identity.name, "Ada");
    }

    #[test]
    fn error_status_uses_backend_message_when_present() {
        let err =
            decode_body::<Identity>(401, false, r#"{"message": "Invalid credentials"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(err.is_unauthorized());
    }

    #[test]
    fn error_status_accepts_error_field_too() {
        let err =
            decode_body::<Identity>(400, false, r#"{"error": "Email already taken"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Email already taken");
    }

    #[test]
    fn error_status_with_non_json_body_gets_generic_message() {
        let err = decode_body::<Identity>(502, false, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! status: 502");
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        let err = decode_body::<Identity>(200, true, "not json at all").unwrap_err();
        assert!(matches!(err, SignDetectError::Decode(_)));
    }

    #[test]
    fn empty_success_body_decodes_as_null() {
        let value: serde_json::Value = decode_body(200, true, "").unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let api = ApiClient::new("http://localhost:8080/api/").unwrap();
        assert_eq!(api.base_url(), "http://localhost:8080/api");
    }
}
