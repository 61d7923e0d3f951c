//! Detection service trait.
//!
//! Defines the interface to the backend's detection endpoints, decoupling
//! the polling lifecycle from the HTTP transport.

use super::model::{LatestPrediction, SessionClosed, SessionPage, SessionStarted};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract client for the backend's detection operations.
///
/// The backend tracks at most one live session per authenticated user, so
/// none of the operations take a session id; the ambient credential scopes
/// them.
#[async_trait]
pub trait DetectionApi: Send + Sync {
    /// Starts a new detection session for the current user.
    async fn start_session(&self) -> Result<SessionStarted>;

    /// Stops the current user's live detection session.
    ///
    /// # Returns
    ///
    /// The backend's final statistics for the closed session.
    async fn stop_session(&self) -> Result<SessionClosed>;

    /// Fetches the most recent prediction for the live session.
    ///
    /// The payload's `prediction` field is null when the model has nothing
    /// confident to report; display defaulting is the caller's concern.
    async fn latest_prediction(&self) -> Result<LatestPrediction>;

    /// Fetches one page of the user's completed sessions.
    ///
    /// # Arguments
    ///
    /// * `page` - 1-based page index
    /// * `limit` - Maximum sessions per page
    async fn session_history(&self, page: u32, limit: u32) -> Result<SessionPage>;
}
