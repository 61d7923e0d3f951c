//! Error types for the SignDetect client platform.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire SignDetect client.
///
/// Every failure crossing the HTTP boundary is normalized into one of these
/// variants with a human-readable message, so callers never see raw
/// transport or serialization faults.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum SignDetectError {
    /// Transport failure: the request never reached the backend or never
    /// returned (DNS, connection refused, timeout).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success HTTP status.
    #[error("{message}")]
    Status { code: u16, message: String },

    /// The response body could not be decoded as the expected JSON shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Caller-side input rejected before any network call.
    #[error("{0}")]
    Validation(String),

    /// Configuration error (bad base URL, unparsable config file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SignDetectError {
    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a Status error from an HTTP status code and message
    pub fn status(code: u16, message: impl Into<String>) -> Self {
        Self::Status {
            code,
            message: message.into(),
        }
    }

    /// Creates a Decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a transport-level failure
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if this is a non-success HTTP status
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }

    /// Check if the backend answered 401/403.
    ///
    /// The auth context treats this the same as any other failure ("not
    /// logged in"), but callers may want to distinguish it for messaging.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { code, .. } if *code == 401 || *code == 403)
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<serde_json::Error> for SignDetectError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<toml::de::Error> for SignDetectError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for SignDetectError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(format!("{} (kind: {:?})", err, err.kind()))
    }
}

/// A type alias for `Result<T, SignDetectError>`.
pub type Result<T> = std::result::Result<T, SignDetectError>;
