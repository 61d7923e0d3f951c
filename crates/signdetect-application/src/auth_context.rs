//! Authenticated-session context.
//!
//! Holds the current identity for the lifetime of a client process and
//! gates access to protected views. State is mutated only through the four
//! named operations; readers get snapshots.

use signdetect_core::SignDetectError;
use signdetect_core::auth::{AccessDecision, AuthApi, AuthState, Identity, guard};
use signdetect_core::error::Result;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Single source of truth for the authenticated identity.
///
/// Construct one per client process and share it (via `Arc`) with every
/// view that needs an access decision. The initial state is
/// `resolving = true` until [`initialize`](Self::initialize) completes;
/// consumers must defer access decisions until then.
pub struct AuthContext {
    auth_api: Arc<dyn AuthApi>,
    state: RwLock<AuthState>,
}

impl AuthContext {
    pub fn new(auth_api: Arc<dyn AuthApi>) -> Self {
        Self {
            auth_api,
            state: RwLock::new(AuthState::initial()),
        }
    }

    /// Resolves the identity attached to the ambient session credential.
    ///
    /// Invoked once per process lifetime. Any failure - transport error,
    /// non-success status, malformed payload - is treated as "not logged
    /// in", never as a fatal error, and there is no automatic retry.
    pub async fn initialize(&self) {
        tracing::info!("[AuthContext] Resolving current identity");

        let identity = match self.auth_api.current_identity().await {
            Ok(identity) => {
                tracing::info!("[AuthContext] Session active for {}", identity.email);
                Some(identity)
            }
            Err(e) => {
                tracing::debug!("[AuthContext] Identity check failed, treating as logged out: {}", e);
                None
            }
        };

        let mut state = self.state.write().await;
        state.identity = identity;
        state.resolving = false;
    }

    /// Authenticates with email and password.
    ///
    /// Both must be non-empty; validation failures are rejected before any
    /// network call. On failure the stored identity is left unchanged.
    /// `resolving` is cleared on every completion path.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(SignDetectError::validation("Email and password are required"));
        }

        self.state.write().await.resolving = true;
        let result = self.auth_api.login(email, password).await;

        let mut state = self.state.write().await;
        state.resolving = false;
        match result {
            Ok(identity) => {
                state.identity = Some(identity.clone());
                Ok(identity)
            }
            Err(e) => {
                tracing::warn!("[AuthContext] Login failed: {}", e);
                Err(e)
            }
        }
    }

    /// Registers a new account.
    ///
    /// Success does NOT authenticate: the identity stays unchanged and the
    /// caller is expected to follow up with [`login`](Self::login).
    pub async fn signup(&self, email: &str, password: &str, name: &str) -> Result<()> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(SignDetectError::validation("Email and password are required"));
        }

        self.state.write().await.resolving = true;
        let result = self.auth_api.signup(email, password, name).await;

        self.state.write().await.resolving = false;
        if let Err(e) = &result {
            tracing::warn!("[AuthContext] Signup failed: {}", e);
        }
        result
    }

    /// Logs out.
    ///
    /// The remote call is best-effort: a failure is logged, not surfaced.
    /// The local identity is cleared unconditionally - state must never
    /// retain a stale identity after a user-initiated logout.
    pub async fn logout(&self) {
        if let Err(e) = self.auth_api.logout().await {
            tracing::warn!("[AuthContext] Remote logout failed (clearing local identity anyway): {}", e);
        }

        let mut state = self.state.write().await;
        state.identity = None;
        state.resolving = false;
    }

    /// Snapshot of the current auth state.
    pub async fn state(&self) -> AuthState {
        self.state.read().await.clone()
    }

    /// The current identity, if authenticated.
    pub async fn identity(&self) -> Option<Identity> {
        self.state.read().await.identity.clone()
    }

    /// The access decision for a protected view, per the route-guard
    /// contract: deferred while resolving, denied when anonymous, granted
    /// otherwise.
    pub async fn access_decision(&self) -> AccessDecision {
        guard::decide(&*self.state.read().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tokio::sync::Notify;

    fn identity() -> Identity {
        Identity {
            id: 1,
            email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
        }
    }

    /// Mock AuthApi with configurable outcomes and call counters.
    struct MockAuthApi {
        identity_result: Mutex<Result<Identity>>,
        login_result: Mutex<Result<Identity>>,
        signup_fails: bool,
        logout_fails: bool,
        login_calls: Mutex<usize>,
        logout_calls: Mutex<usize>,
        /// When set, current_identity waits for this before answering.
        identity_gate: Option<Arc<Notify>>,
    }

    impl MockAuthApi {
        fn new() -> Self {
            Self {
                identity_result: Mutex::new(Ok(identity())),
                login_result: Mutex::new(Ok(identity())),
                signup_fails: false,
                logout_fails: false,
                login_calls: Mutex::new(0),
                logout_calls: Mutex::new(0),
                identity_gate: None,
            }
        }

        fn logged_out() -> Self {
            let mock = Self::new();
            *mock.identity_result.lock().unwrap() =
                Err(SignDetectError::status(401, "Unauthorized"));
            mock
        }
    }

    #[async_trait]
    impl AuthApi for MockAuthApi {
        async fn current_identity(&self) -> Result<Identity> {
            if let Some(gate) = &self.identity_gate {
                gate.notified().await;
            }
            self.identity_result.lock().unwrap().clone()
        }

        async fn login(&self, _email: &str, _password: &str) -> Result<Identity> {
            *self.login_calls.lock().unwrap() += 1;
            self.login_result.lock().unwrap().clone()
        }

        async fn signup(&self, _email: &str, _password: &str, _name: &str) -> Result<()> {
            if self.signup_fails {
                Err(SignDetectError::status(400, "Email already taken"))
            } else {
                Ok(())
            }
        }

        async fn logout(&self) -> Result<()> {
            *self.logout_calls.lock().unwrap() += 1;
            if self.logout_fails {
                Err(SignDetectError::transport("connection reset"))
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn initialize_success_sets_identity() {
        let context = AuthContext::new(Arc::new(MockAuthApi::new()));
        context.initialize().await;

        let state = context.state().await;
        assert!(!state.resolving);
        assert_eq!(state.identity, Some(identity()));
        assert_eq!(context.access_decision().await, AccessDecision::Granted);
    }

    #[tokio::test]
    async fn initialize_failure_means_logged_out() {
        let context = AuthContext::new(Arc::new(MockAuthApi::logged_out()));
        context.initialize().await;

        let state = context.state().await;
        assert!(!state.resolving);
        assert!(state.identity.is_none());
        assert_eq!(context.access_decision().await, AccessDecision::Denied);
    }

    #[tokio::test]
    async fn no_access_decision_while_resolving() {
        let gate = Arc::new(Notify::new());
        let mut mock = MockAuthApi::new();
        mock.identity_gate = Some(Arc::clone(&gate));
        let context = Arc::new(AuthContext::new(Arc::new(mock)));

        // Resolution has not started yet: still deferred
        assert_eq!(context.access_decision().await, AccessDecision::Deferred);

        let init_context = Arc::clone(&context);
        let init = tokio::spawn(async move { init_context.initialize().await });

        // The identity response is delayed; the guard must keep deferring
        tokio::task::yield_now().await;
        assert_eq!(context.access_decision().await, AccessDecision::Deferred);

        gate.notify_one();
        init.await.unwrap();
        assert_eq!(context.access_decision().await, AccessDecision::Granted);
    }

    #[tokio::test]
    async fn login_rejects_empty_credentials_without_remote_call() {
        let mock = Arc::new(MockAuthApi::new());
        let context = AuthContext::new(Arc::clone(&mock) as Arc<dyn AuthApi>);

        let err = context.login("", "secret").await.unwrap_err();
        assert!(matches!(err, SignDetectError::Validation(_)));
        let err = context.login("ada@example.com", "").await.unwrap_err();
        assert!(matches!(err, SignDetectError::Validation(_)));

        assert_eq!(*mock.login_calls.lock().unwrap(), 0);
        assert!(!context.state().await.resolving);
    }

    #[tokio::test]
    async fn login_failure_leaves_identity_unchanged_and_clears_resolving() {
        let mock = MockAuthApi::logged_out();
        *mock.login_result.lock().unwrap() = Err(SignDetectError::status(401, "Invalid credentials"));
        let context = AuthContext::new(Arc::new(mock));
        context.initialize().await;

        let err = context.login("ada@example.com", "wrong").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");

        let state = context.state().await;
        assert!(state.identity.is_none());
        assert!(!state.resolving);
    }

    #[tokio::test]
    async fn login_success_sets_identity() {
        let context = AuthContext::new(Arc::new(MockAuthApi::logged_out()));
        context.initialize().await;
        assert_eq!(context.access_decision().await, AccessDecision::Denied);

        let logged_in = context.login("ada@example.com", "secret").await.unwrap();
        assert_eq!(logged_in, identity());
        assert_eq!(context.identity().await, Some(identity()));
        assert!(!context.state().await.resolving);
    }

    #[tokio::test]
    async fn signup_success_does_not_authenticate() {
        let context = AuthContext::new(Arc::new(MockAuthApi::logged_out()));
        context.initialize().await;

        context
            .signup("ada@example.com", "secret", "Ada")
            .await
            .unwrap();

        let state = context.state().await;
        assert!(state.identity.is_none());
        assert!(!state.resolving);
    }

    #[tokio::test]
    async fn logout_clears_identity_even_when_remote_call_fails() {
        let mut mock = MockAuthApi::new();
        mock.logout_fails = true;
        let mock = Arc::new(mock);
        let context = AuthContext::new(Arc::clone(&mock) as Arc<dyn AuthApi>);
        context.initialize().await;
        assert!(context.identity().await.is_some());

        context.logout().await;

        assert_eq!(*mock.logout_calls.lock().unwrap(), 1);
        assert!(context.identity().await.is_none());
        assert_eq!(context.access_decision().await, AccessDecision::Denied);
    }
}
