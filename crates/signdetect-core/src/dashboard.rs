//! Platform dashboard statistics.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TotalUsers {
    pub total_users: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ActiveUsers {
    pub active_users: u64,
}

/// An abstract client for the platform-wide dashboard counters.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// Total registered users on the platform.
    async fn total_users(&self) -> Result<TotalUsers>;

    /// Users with a live detection session right now.
    async fn active_users(&self) -> Result<ActiveUsers>;
}
