//! Authentication domain: identity model, service trait and route guard.

pub mod guard;
pub mod model;
pub mod service;

pub use guard::AccessDecision;
pub use model::{AuthState, Identity};
pub use service::AuthApi;
