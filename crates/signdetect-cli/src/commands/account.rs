use anyhow::Result;
use signdetect_application::AuthContext;
use signdetect_client::HttpAuthApi;
use signdetect_core::config::ClientConfig;
use std::sync::Arc;

pub async fn signup(config: &ClientConfig, email: &str, password: &str, name: &str) -> Result<()> {
    let api = super::api_client(config)?;
    let auth = AuthContext::new(Arc::new(HttpAuthApi::new(api)));

    auth.signup(email, password, name).await?;

    // Signup does not authenticate; the user logs in afterwards
    println!("Account created for {}. Log in with `signdetect live` or `signdetect history`.", email);
    Ok(())
}
