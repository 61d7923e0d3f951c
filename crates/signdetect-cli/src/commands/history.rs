use anyhow::Result;
use signdetect_client::HttpDetectionApi;
use signdetect_core::config::ClientConfig;
use signdetect_core::detection::DetectionApi;
use signdetect_core::stats;

pub async fn run(
    config: &ClientConfig,
    email: &str,
    password: &str,
    page: u32,
    limit: u32,
) -> Result<()> {
    let api = super::api_client(config)?;
    let auth = super::authenticate(&api, email, password).await?;

    let detection = HttpDetectionApi::new(api);
    let history = detection.session_history(page, limit).await?;

    if history.sessions.is_empty() {
        println!("No completed sessions.");
    } else {
        println!(
            "{:<8} {:<24} {:>9} {:>13} {:>11}",
            "ID", "Started", "Duration", "Predictions", "Confidence"
        );
        for session in &history.sessions {
            println!(
                "{:<8} {:<24} {:>9} {:>13} {:>10.1}%",
                session.id,
                session.start_time,
                stats::format_duration(session.duration.max(0) as u64 * 1000),
                session.total_predictions,
                session.average_confidence,
            );
        }
        println!(
            "Page {} of {} ({} sessions total)",
            history.current_page, history.total_pages, history.total_sessions
        );
    }

    auth.logout().await;
    Ok(())
}
