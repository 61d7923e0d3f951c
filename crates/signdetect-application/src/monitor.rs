//! Live-detection polling lifecycle.
//!
//! A `DetectionMonitor` owns at most one remote detection session and the
//! poll task that keeps its displayed prediction fresh. The poll task is an
//! owned resource: arming happens only on a successful start, and every
//! exit path (stop, local teardown, drop) disarms it so no periodic work
//! outlives the session.

use signdetect_core::detection::{
    DetectionApi, DetectionSession, Prediction, SessionClosed, SessionPage,
};
use signdetect_core::error::Result;
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

/// Lifecycle phase of the monitor.
///
/// `Starting` exists so that a second `start_session` arriving while the
/// remote start call is still in flight is absorbed as a no-op instead of
/// issuing a second remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    Starting,
    Active,
}

#[derive(Default)]
struct MonitorState {
    phase: Phase,
    session: Option<DetectionSession>,
    latest: Option<Prediction>,
}

/// Manages one live detection session and its prediction poll loop.
///
/// # State machine
///
/// idle -> active on successful start; active -> idle on stop (or local
/// teardown). Start while active and stop while idle are precondition
/// no-ops, not errors. The poll timer is armed if and only if the phase is
/// active.
pub struct DetectionMonitor {
    detection_api: Arc<dyn DetectionApi>,
    poll_interval: Duration,
    state: Arc<RwLock<MonitorState>>,
    poll_task: StdMutex<Option<JoinHandle<()>>>,
}

impl DetectionMonitor {
    pub fn new(detection_api: Arc<dyn DetectionApi>, poll_interval: Duration) -> Self {
        Self {
            detection_api,
            poll_interval,
            state: Arc::new(RwLock::new(MonitorState::default())),
            poll_task: StdMutex::new(None),
        }
    }

    /// Starts a remote detection session and arms the poll task.
    ///
    /// No-op when a session is already active or a start is in flight. On
    /// remote failure the monitor stays idle, nothing is armed, and the
    /// error is returned for display.
    pub async fn start_session(&self) -> Result<()> {
        {
            let mut state = self.state.write().await;
            if state.phase != Phase::Idle {
                tracing::debug!("[DetectionMonitor] start_session ignored: session already active");
                return Ok(());
            }
            state.phase = Phase::Starting;
        }

        match self.detection_api.start_session().await {
            Ok(started) => {
                {
                    let mut state = self.state.write().await;
                    state.phase = Phase::Active;
                    state.latest = None;
                    state.session = Some(started.into());
                }
                self.arm_poll_task();
                Ok(())
            }
            Err(e) => {
                self.state.write().await.phase = Phase::Idle;
                tracing::warn!("[DetectionMonitor] Failed to start session: {}", e);
                Err(e)
            }
        }
    }

    /// Stops the current session.
    ///
    /// No-op when idle. Local state transitions to idle and the poll task
    /// disarms before the remote call is made - stop is user intent, so a
    /// remote failure never leaves an orphaned timer; the error is still
    /// returned for display.
    pub async fn stop_session(&self) -> Result<Option<SessionClosed>> {
        {
            let mut state = self.state.write().await;
            if state.phase != Phase::Active {
                tracing::debug!("[DetectionMonitor] stop_session ignored: no active session");
                return Ok(None);
            }
            // A tick firing from here on observes idle and does not execute
            state.phase = Phase::Idle;
            state.session = None;
            state.latest = None;
        }
        self.abort_poll_task();

        match self.detection_api.stop_session().await {
            Ok(closed) => Ok(Some(closed)),
            Err(e) => {
                tracing::warn!("[DetectionMonitor] Remote stop failed (session cleared locally): {}", e);
                Err(e)
            }
        }
    }

    /// Local-only teardown for when the owning view goes away: clears state
    /// and disarms the poll task without calling the backend.
    pub async fn disarm(&self) {
        let mut state = self.state.write().await;
        *state = MonitorState::default();
        drop(state);
        self.abort_poll_task();
    }

    /// Whether a session is currently active.
    pub async fn is_active(&self) -> bool {
        self.state.read().await.phase == Phase::Active
    }

    /// The current session, if one is active.
    pub async fn session(&self) -> Option<DetectionSession> {
        self.state.read().await.session.clone()
    }

    /// The most recently displayed prediction, if any.
    pub async fn latest_prediction(&self) -> Option<Prediction> {
        self.state.read().await.latest.clone()
    }

    /// Fetches one page of the user's completed sessions.
    pub async fn session_history(&self, page: u32, limit: u32) -> Result<SessionPage> {
        self.detection_api.session_history(page, limit).await
    }

    fn arm_poll_task(&self) {
        let api = Arc::clone(&self.detection_api);
        let state = Arc::clone(&self.state);
        let period = self.poll_interval;

        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // interval yields immediately; consume that tick so the first
            // poll lands one full period after the session starts
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if state.read().await.phase != Phase::Active {
                    break;
                }
                Self::poll_once(&api, &state).await;
            }
            tracing::debug!("[DetectionMonitor] Poll task exited");
        });

        let mut slot = self.poll_task.lock().unwrap_or_else(|p| p.into_inner());
        if let Some(old) = slot.replace(handle) {
            old.abort();
        }
    }

    fn abort_poll_task(&self) {
        let mut slot = self.poll_task.lock().unwrap_or_else(|p| p.into_inner());
        if let Some(handle) = slot.take() {
            handle.abort();
        }
    }

    /// One poll tick: fetch the latest prediction and replace the displayed
    /// value. Failures are logged and swallowed - a transient error must
    /// never stop the loop.
    async fn poll_once(api: &Arc<dyn DetectionApi>, state: &Arc<RwLock<MonitorState>>) {
        match api.latest_prediction().await {
            Ok(latest) => {
                let prediction: Prediction = latest.into();
                let mut guard = state.write().await;
                if guard.phase == Phase::Active {
                    guard.latest = Some(prediction);
                }
            }
            Err(e) => {
                tracing::warn!("[DetectionMonitor] Poll failed, retrying next tick: {}", e);
            }
        }
    }
}

impl Drop for DetectionMonitor {
    fn drop(&mut self) {
        // Guaranteed release: a dropped monitor must not leave periodic
        // work calling the backend
        self.abort_poll_task();
    }
}
