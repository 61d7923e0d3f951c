use anyhow::Result;
use signdetect_application::DetectionMonitor;
use signdetect_client::HttpDetectionApi;
use signdetect_core::config::ClientConfig;
use signdetect_core::detection::Prediction;
use signdetect_core::stats;
use std::sync::Arc;

/// Runs a live detection session: start, stream predictions until Ctrl-C,
/// stop, log out.
pub async fn run(config: &ClientConfig, email: &str, password: &str) -> Result<()> {
    let api = super::api_client(config)?;
    let auth = super::authenticate(&api, email, password).await?;

    let detection = Arc::new(HttpDetectionApi::new(api));
    let monitor = DetectionMonitor::new(detection, config.poll_interval());

    monitor.start_session().await?;
    if let Some(session) = monitor.session().await {
        println!(
            "Session {} started at {}. Press Ctrl-C to stop.",
            session.session_id, session.started_at
        );
    }

    let mut shown: Option<Prediction> = None;
    let mut collected: Vec<Prediction> = Vec::new();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            _ = tokio::time::sleep(config.poll_interval()) => {
                if let Some(latest) = monitor.latest_prediction().await
                    && shown.as_ref() != Some(&latest)
                {
                    println!(
                        "[{}] {:>6.1}%  {}",
                        chrono::Local::now().format("%H:%M:%S"),
                        latest.confidence,
                        latest.sign
                    );
                    collected.push(latest.clone());
                    shown = Some(latest);
                }
            }
        }
    }

    println!("\nStopping session...");
    match monitor.stop_session().await {
        Ok(Some(closed)) => {
            if let Some(duration) = closed.duration {
                println!("Duration:            {}", stats::format_duration(duration.max(0) as u64 * 1000));
            }
            if let Some(total) = closed.total_predictions {
                println!("Total predictions:   {}", total);
            }
            if let Some(avg) = closed.average_confidence {
                println!("Average confidence:  {:.1}%", avg);
            }
            if let Some(unique) = closed.unique_signs {
                println!("Unique signs:        {}", unique);
            }
        }
        Ok(None) => {}
        Err(e) => eprintln!("Session cleared locally, but the backend stop failed: {}", e),
    }

    let top = stats::most_frequent_signs(&collected, 5);
    if !top.is_empty() {
        println!("Most frequent signs this session:");
        for entry in top {
            println!("  {:<12} x{:<4} avg {:.1}%", entry.sign, entry.count, entry.avg_confidence);
        }
    }

    auth.logout().await;
    Ok(())
}
