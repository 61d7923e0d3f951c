//! Detection domain: session and prediction models plus the service trait.

pub mod model;
pub mod service;

pub use model::{
    DetectionSession, LatestPrediction, Prediction, SessionClosed, SessionPage, SessionRecord,
    SessionStarted, SessionStatus, UNCERTAIN_SIGN,
};
pub use service::DetectionApi;
