pub mod account;
pub mod history;
pub mod live;
pub mod stats;

use anyhow::Result;
use signdetect_application::AuthContext;
use signdetect_client::{ApiClient, HttpAuthApi};
use signdetect_core::auth::AccessDecision;
use signdetect_core::config::ClientConfig;
use std::sync::Arc;

pub(crate) fn api_client(config: &ClientConfig) -> Result<ApiClient> {
    Ok(ApiClient::new(&config.api_base_url)?)
}

/// Builds an auth context, resolves any existing session and logs in with
/// the given credentials if needed.
pub(crate) async fn authenticate(
    api: &ApiClient,
    email: &str,
    password: &str,
) -> Result<AuthContext> {
    let auth = AuthContext::new(Arc::new(HttpAuthApi::new(api.clone())));
    auth.initialize().await;

    if auth.access_decision().await != AccessDecision::Granted {
        let identity = auth.login(email, password).await?;
        println!("Logged in as {} <{}>", identity.name, identity.email);
    }

    Ok(auth)
}
