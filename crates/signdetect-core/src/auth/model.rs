//! Authentication state models.

use serde::{Deserialize, Serialize};

/// The authenticated user record held client-side.
///
/// Exists only while a valid backend session cookie is active; the client
/// never stores credentials itself.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: i64,
    pub email: String,
    pub name: String,
}

/// Snapshot of the auth context's state.
///
/// `resolving` is true only during the initial identity check or while a
/// login/signup call is in flight. Consumers must treat `resolving = true`
/// as "decision deferred", never as "unauthenticated".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    pub identity: Option<Identity>,
    pub resolving: bool,
}

impl AuthState {
    /// The state before the initial identity check has completed.
    pub fn initial() -> Self {
        Self {
            identity: None,
            resolving: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::initial()
    }
}
