//! Application layer: the session/detection lifecycle components.
//!
//! Two objects live here, and both are explicitly constructed and injected
//! rather than ambient:
//!
//! - [`AuthContext`] - single source of truth for "who is logged in",
//!   shared by every protected view.
//! - [`DetectionMonitor`] - per-view owner of one live detection session
//!   and its prediction poll task.

pub mod auth_context;
pub mod monitor;

pub use auth_context::AuthContext;
pub use monitor::DetectionMonitor;
