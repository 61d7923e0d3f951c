//! Detection session and prediction models.
//!
//! Wire shapes follow the backend DTOs (camelCase JSON). Timestamps are
//! carried as the backend's ISO-8601 strings and not reinterpreted.

use serde::{Deserialize, Serialize};

/// Sentinel sign displayed when the backend reports no prediction.
pub const UNCERTAIN_SIGN: &str = "Uncertain";

/// Status of a detection session as seen by the client.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Ended,
}

/// Client view of a detection session.
///
/// Owned exclusively by the monitor that started it; never shared across
/// views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionSession {
    pub session_id: i64,
    pub status: SessionStatus,
    pub started_at: String,
}

/// A single recognized sign with its confidence in `[0, 100]`.
///
/// Transient: each successful poll replaces the previous value. History is
/// a backend-owned concept fetched separately.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Prediction {
    pub sign: String,
    pub confidence: f64,
}

impl Prediction {
    /// The value displayed when the backend returns no prediction.
    pub fn uncertain() -> Self {
        Self {
            sign: UNCERTAIN_SIGN.to_string(),
            confidence: 100.0,
        }
    }
}

/// Response payload of a successful session start.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SessionStarted {
    pub session_id: i64,
    pub status: SessionStatus,
    pub start_time: String,
}

impl From<SessionStarted> for DetectionSession {
    fn from(started: SessionStarted) -> Self {
        Self {
            session_id: started.session_id,
            status: started.status,
            started_at: started.start_time,
        }
    }
}

/// Response payload of a session stop, including the backend's final
/// statistics for the session.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SessionClosed {
    pub session_id: i64,
    pub status: String,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub total_predictions: Option<u64>,
    #[serde(default)]
    pub average_confidence: Option<f64>,
    #[serde(default)]
    pub unique_signs: Option<u64>,
}

/// Response payload of the latest-prediction poll.
///
/// `prediction` is null when the model is not confident about any sign.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LatestPrediction {
    pub prediction: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl From<LatestPrediction> for Prediction {
    /// Applies the display defaulting rule: a missing prediction becomes
    /// `Uncertain` at confidence 100.
    fn from(latest: LatestPrediction) -> Self {
        Self {
            sign: latest
                .prediction
                .unwrap_or_else(|| UNCERTAIN_SIGN.to_string()),
            confidence: latest.confidence.unwrap_or(100.0),
        }
    }
}

/// One completed session in the history listing.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: i64,
    pub start_time: String,
    pub duration: i64,
    pub total_predictions: u64,
    pub average_confidence: f64,
    #[serde(default)]
    pub letters: Option<Vec<String>>,
}

/// A page of session history.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SessionPage {
    pub sessions: Vec<SessionRecord>,
    pub total_pages: u32,
    pub current_page: u32,
    pub total_sessions: u64,
}
