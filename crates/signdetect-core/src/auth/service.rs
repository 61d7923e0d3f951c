//! Authentication service trait.
//!
//! Defines the interface to the backend's user endpoints, decoupling the
//! auth context from the HTTP transport.

use super::model::Identity;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract client for the backend's authentication operations.
///
/// All requests carry the ambient session credential (a cookie managed by
/// the transport); implementations never expose or parse it.
///
/// # Implementation Notes
///
/// Implementations must normalize every failure (transport, non-success
/// status, malformed body) into a `SignDetectError` with a human-readable
/// message - callers rely on never seeing a raw transport fault.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Fetches the identity associated with the ambient session credential.
    ///
    /// # Returns
    ///
    /// - `Ok(Identity)`: a valid session exists
    /// - `Err(_)`: no session, or the check failed; callers treat both as
    ///   "not logged in"
    async fn current_identity(&self) -> Result<Identity>;

    /// Authenticates with email and password.
    ///
    /// On success the backend sets the session cookie on the transport and
    /// returns the identity.
    async fn login(&self, email: &str, password: &str) -> Result<Identity>;

    /// Registers a new account.
    ///
    /// Success does NOT imply an authenticated session; callers are expected
    /// to follow up with `login`.
    async fn signup(&self, email: &str, password: &str, name: &str) -> Result<()>;

    /// Terminates the backend session.
    ///
    /// Best-effort from the caller's perspective: the auth context clears
    /// its local identity regardless of the outcome.
    async fn logout(&self) -> Result<()>;
}
