use anyhow::Result;
use signdetect_client::HttpDetectionApi;
use signdetect_core::config::ClientConfig;
use signdetect_core::dashboard::DashboardApi;

pub async fn run(config: &ClientConfig) -> Result<()> {
    let api = super::api_client(config)?;
    let dashboard = HttpDetectionApi::new(api);

    let total = dashboard.total_users().await?;
    let active = dashboard.active_users().await?;

    println!("Registered users: {}", total.total_users);
    println!("Live sessions:    {}", active.active_users);
    Ok(())
}
