//! HTTP implementation of the detection and dashboard APIs.

use crate::http::ApiClient;
use async_trait::async_trait;
use signdetect_core::dashboard::{ActiveUsers, DashboardApi, TotalUsers};
use signdetect_core::detection::{
    DetectionApi, LatestPrediction, SessionClosed, SessionPage, SessionStarted,
};
use signdetect_core::error::Result;

/// Detection client for the backend's `/detection` and `/dashboard`
/// endpoints.
#[derive(Clone)]
pub struct HttpDetectionApi {
    api: ApiClient,
}

impl HttpDetectionApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl DetectionApi for HttpDetectionApi {
    async fn start_session(&self) -> Result<SessionStarted> {
        tracing::debug!("[DetectionApi] Starting detection session");
        let started: SessionStarted = self.api.post_empty("/detection/start").await?;
        tracing::info!("[DetectionApi] Session {} started", started.session_id);
        Ok(started)
    }

    async fn stop_session(&self) -> Result<SessionClosed> {
        tracing::debug!("[DetectionApi] Stopping detection session");
        let closed: SessionClosed = self.api.post_empty("/detection/stop").await?;
        tracing::info!("[DetectionApi] Session {} stopped", closed.session_id);
        Ok(closed)
    }

    async fn latest_prediction(&self) -> Result<LatestPrediction> {
        self.api.get_json("/detection/result").await
    }

    async fn session_history(&self, page: u32, limit: u32) -> Result<SessionPage> {
        tracing::debug!("[DetectionApi] Fetching session history page {}", page);
        self.api
            .get_json(&format!("/detection/sessions?page={}&limit={}", page, limit))
            .await
    }
}

#[async_trait]
impl DashboardApi for HttpDetectionApi {
    async fn total_users(&self) -> Result<TotalUsers> {
        self.api.get_json("/dashboard/users/total").await
    }

    async fn active_users(&self) -> Result<ActiveUsers> {
        self.api.get_json("/dashboard/users/active").await
    }
}
