pub mod auth;
pub mod config;
pub mod dashboard;
pub mod detection;
pub mod error;
pub mod stats;

// Re-export common error type
pub use error::SignDetectError;
