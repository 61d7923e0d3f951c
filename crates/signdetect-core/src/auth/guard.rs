//! Route guard decision logic.
//!
//! Protected views take no access decision while the auth state is still
//! resolving; deciding early would either flash protected content or
//! redirect a user whose session check simply has not finished yet.

use super::model::AuthState;

/// The access decision for a protected view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Resolution is pending; render a loading state and decide nothing.
    Deferred,
    /// Resolved and unauthenticated; redirect away from the view.
    Denied,
    /// Resolved and authenticated; render the view.
    Granted,
}

/// Decides access for a protected view from the current auth state.
///
/// `Deferred` is returned whenever `resolving` is true, regardless of the
/// identity value.
pub fn decide(state: &AuthState) -> AccessDecision {
    if state.resolving {
        AccessDecision::Deferred
    } else if state.is_authenticated() {
        AccessDecision::Granted
    } else {
        AccessDecision::Denied
    }
}
