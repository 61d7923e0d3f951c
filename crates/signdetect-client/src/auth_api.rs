//! HTTP implementation of the authentication API.
//!
//! Talks to the backend's `/users` endpoints. The session credential is a
//! cookie the backend sets on login; it lives in the shared `ApiClient`
//! cookie store and is never handled here directly.

use crate::http::ApiClient;
use async_trait::async_trait;
use serde::Serialize;
use signdetect_core::auth::{AuthApi, Identity};
use signdetect_core::error::Result;

/// Authentication client for the detection backend.
#[derive(Clone)]
pub struct HttpAuthApi {
    api: ApiClient,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

// The backend validates that password and confirmPassword match; the
// dashboard sends the same value for both.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignupRequest<'a> {
    email: &'a str,
    password: &'a str,
    confirm_password: &'a str,
    name: &'a str,
}

impl HttpAuthApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn current_identity(&self) -> Result<Identity> {
        tracing::debug!("[AuthApi] Checking current identity");
        self.api.get_json("/users/me").await
    }

    async fn login(&self, email: &str, password: &str) -> Result<Identity> {
        tracing::debug!("[AuthApi] Logging in as {}", email);
        let identity: Identity = self
            .api
            .post_json("/users/login", &LoginRequest { email, password })
            .await?;
        tracing::info!("[AuthApi] Logged in as {} (id {})", identity.email, identity.id);
        Ok(identity)
    }

    async fn signup(&self, email: &str, password: &str, name: &str) -> Result<()> {
        tracing::debug!("[AuthApi] Signing up {}", email);
        let _: serde_json::Value = self
            .api
            .post_json(
                "/users/signup",
                &SignupRequest {
                    email,
                    password,
                    confirm_password: password,
                    name,
                },
            )
            .await?;
        Ok(())
    }

    async fn logout(&self) -> Result<()> {
        tracing::debug!("[AuthApi] Logging out");
        let _: serde_json::Value = self.api.post_empty("/users/logout").await?;
        Ok(())
    }
}
